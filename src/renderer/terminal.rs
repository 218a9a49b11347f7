use crossterm::style::Stylize;

use crate::core::font::{FontTable, GLYPH_WIDTH};
use crate::renderer::charset;

/// Print one glyph to the terminal as a compact half-block preview.
pub fn print_glyph(font: &FontTable, index: usize) {
    let glyph = match font.glyph(index) {
        Some(glyph) => glyph,
        None => {
            println!("{}", format!("Invalid character index: {}", index).red());
            return;
        }
    };

    let heading = format!(
        "Character {} (0x{:02X}) - {}",
        index,
        index,
        charset::label_for(index)
    );
    println!("{}", heading.bold());
    for line in glyph_lines(glyph) {
        println!("{}", line);
    }
}

/// Fold the row bytes into terminal lines, two bitmap rows per line using
/// half-block cells. An odd trailing row pairs with an implicit empty row.
pub fn glyph_lines(rows: &[u8]) -> Vec<String> {
    rows.chunks(2)
        .map(|pair| {
            let top = pair[0];
            let bottom = pair.get(1).copied().unwrap_or(0);
            let mut line = String::with_capacity(GLYPH_WIDTH * 3);
            for col in 0..GLYPH_WIDTH {
                let top_set = (top >> (7 - col)) & 1 == 1;
                let bottom_set = (bottom >> (7 - col)) & 1 == 1;
                line.push(match (top_set, bottom_set) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            line
        })
        .collect()
}
