use crate::core::font::{FontTable, GLYPH_WIDTH};
use crate::renderer::charset;

// Cell markers for the fenced grid.
const FILLED: char = '.';
const BLANK: char = ' ';

/// Render one glyph as a Markdown section: a heading with the index in
/// decimal and hex plus the CP437 label, then the 8x8 bitmap inside a code
/// fence so the blank cells survive Markdown rendering.
///
/// An index past the table renders a visible marker line instead of failing,
/// so a partial table still produces a document.
pub fn render_glyph(font: &FontTable, index: usize) -> String {
    let glyph = match font.glyph(index) {
        Some(glyph) => glyph,
        None => return format!("Invalid character index: {}\n", index),
    };

    let mut out = format!(
        "### Character {} (0x{:02X}) - {}\n\n",
        index,
        index,
        charset::label_for(index)
    );
    out.push_str("```\n");
    for &byte in glyph {
        for col in 0..GLYPH_WIDTH {
            // MSB first: bit 7 is the leftmost pixel
            let bit = (byte >> (7 - col)) & 1;
            out.push(if bit == 1 { FILLED } else { BLANK });
        }
        out.push('\n');
    }
    out.push_str("```\n\n");
    out
}

/// Render the whole character map: title, range line, then one section per
/// glyph in ascending index order, clamped to the table.
pub fn render_document(font: &FontTable, start: usize, end: usize) -> String {
    let mut doc = String::from("# 8x8 Font Character Map (Code Page 437)\n\n");
    doc.push_str(&format!(
        "Displaying characters {} to {} (0x{:02X} to 0x{:02X})\n\n",
        start, end, start, end
    ));

    for index in start..end.saturating_add(1).min(font.len()) {
        doc.push_str(&render_glyph(font, index));
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font::{GLYPH_COUNT, GLYPH_HEIGHT};

    fn font_with_first_glyph(rows: [u8; 8]) -> FontTable {
        let mut data = vec![0u8; GLYPH_COUNT * GLYPH_HEIGHT];
        data[..8].copy_from_slice(&rows);
        FontTable::new(data, GLYPH_COUNT)
    }

    fn grid_lines(section: &str) -> Vec<&str> {
        section
            .lines()
            .skip_while(|line| *line != "```")
            .skip(1)
            .take_while(|line| *line != "```")
            .collect()
    }

    #[test]
    fn test_render_glyph_heading() {
        let font = font_with_first_glyph([0; 8]);
        let section = render_glyph(&font, 0);
        assert!(section.starts_with("### Character 0 (0x00) - NUL (Null)\n"));
        assert!(section.ends_with("```\n\n"));
    }

    #[test]
    fn test_render_glyph_all_set() {
        let font = font_with_first_glyph([0xFF; 8]);
        let section = render_glyph(&font, 0);
        let lines = grid_lines(&section);
        assert_eq!(lines.len(), 8);
        for line in lines {
            assert_eq!(line, "........");
        }
    }

    #[test]
    fn test_render_glyph_all_clear() {
        let font = font_with_first_glyph([0x00; 8]);
        let section = render_glyph(&font, 0);
        let lines = grid_lines(&section);
        assert_eq!(lines.len(), 8);
        for line in lines {
            assert_eq!(line, "        ");
        }
    }

    #[test]
    fn test_render_glyph_bit_order() {
        let font = font_with_first_glyph([0x80, 0x01, 0, 0, 0, 0, 0, 0]);
        let section = render_glyph(&font, 0);
        let lines = grid_lines(&section);
        assert_eq!(lines[0], ".       ");
        assert_eq!(lines[1], "       .");
    }

    #[test]
    fn test_render_glyph_out_of_range() {
        let font = font_with_first_glyph([0; 8]);
        let section = render_glyph(&font, 300);
        assert_eq!(section, "Invalid character index: 300\n");
    }

    #[test]
    fn test_render_glyph_truncated_tail() {
        // 12 bytes as 2 glyphs: the second record has only 4 rows.
        let font = FontTable::new(vec![0xFF; 12], 2);
        let section = render_glyph(&font, 1);
        let lines = grid_lines(&section);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_document_single_index_range() {
        let font = font_with_first_glyph([0; 8]);
        let doc = render_document(&font, 2, 2);
        assert_eq!(doc.matches("### Character ").count(), 1);
        assert!(doc.contains("### Character 2 (0x02)"));
        assert!(doc.contains("Displaying characters 2 to 2 (0x02 to 0x02)"));
    }

    #[test]
    fn test_render_document_clamps_to_table() {
        let font = FontTable::new(vec![0u8; 4 * GLYPH_HEIGHT], 4);
        let doc = render_document(&font, 0, 255);
        assert_eq!(doc.matches("### Character ").count(), 4);
        assert!(doc.starts_with("# 8x8 Font Character Map (Code Page 437)\n"));
    }

    #[test]
    fn test_extract_to_document_pipeline() {
        // First glyph alternates blank/filled rows in the source text itself.
        let mut tokens = vec!["00"; GLYPH_COUNT * GLYPH_HEIGHT];
        for row in 0..8 {
            tokens[row] = if row % 2 == 1 { "FF" } else { "00" };
        }
        let source = format!("memory_initialization_vector=\n{};\n", tokens.join(",\n"));

        let bytes = crate::core::extractor::extract(&source).unwrap();
        let font = FontTable::new(bytes, GLYPH_COUNT);
        let doc = render_document(&font, 0, 255);

        assert!(doc.contains("### Character 0 (0x00)"));
        assert_eq!(doc.matches("### Character ").count(), GLYPH_COUNT);
        let first = render_glyph(&font, 0);
        let lines = grid_lines(&first);
        assert_eq!(lines, vec![
            "        ", "........", "        ", "........",
            "        ", "........", "        ", "........",
        ]);
        let second = render_glyph(&font, 1);
        for line in grid_lines(&second) {
            assert_eq!(line, "        ");
        }
    }
}
