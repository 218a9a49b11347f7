use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::core::font::FontTable;
use crate::renderer::{charset, terminal};

/// Interactive character browser: pick an index from the list, see its
/// half-block preview, repeat until quit.
pub fn run_menu(font: &FontTable) -> Result<()> {
    if font.is_empty() {
        println!("Font table is empty, nothing to browse.");
        return Ok(());
    }

    let items: Vec<String> = (0..font.len())
        .map(|index| format!("{:3} (0x{:02X}) {}", index, index, charset::label_for(index)))
        .collect();

    let mut cursor = 0;
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a character")
            .default(cursor)
            .items(&items)
            .interact()?;
        cursor = selection;

        println!();
        terminal::print_glyph(font, selection);
        println!();

        let next = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Next")
            .default(0)
            .items(&["Another character", "Quit"])
            .interact()?;
        if next == 1 {
            break;
        }
    }

    Ok(())
}
