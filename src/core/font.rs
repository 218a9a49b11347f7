use serde::Serialize;

/// Bytes per glyph record: one byte per row of the 8x8 bitmap.
pub const GLYPH_HEIGHT: usize = 8;

/// Pixel columns per row, MSB first (bit 7 is the leftmost pixel).
pub const GLYPH_WIDTH: usize = 8;

/// Canonical glyph count of a full CP437 code page.
pub const GLYPH_COUNT: usize = 256;

/// A fixed-size view over the extracted byte stream, one record per glyph.
///
/// Glyphs are borrowed slices into the backing buffer. Records past the end of
/// the buffer come back truncated (down to empty) rather than failing; the
/// extractor's minimum-length check keeps that from happening for in-range
/// indices in the default configuration.
pub struct FontTable {
    data: Vec<u8>,
    count: usize,
    record_size: usize,
}

/// Summary of a loaded font table, for JSON output.
#[derive(Debug, Serialize)]
pub struct FontInfo {
    pub byte_count: usize,
    pub glyph_count: usize,
    pub record_size: usize,
    pub trailing_bytes: usize,
}

impl FontTable {
    pub fn new(data: Vec<u8>, count: usize) -> Self {
        Self::with_record_size(data, count, GLYPH_HEIGHT)
    }

    pub fn with_record_size(data: Vec<u8>, count: usize, record_size: usize) -> Self {
        Self { data, count, record_size }
    }

    /// Number of glyphs the table was configured with.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Row bytes of one glyph, or None past the configured count.
    pub fn glyph(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }
        let start = (index * self.record_size).min(self.data.len());
        let end = (start + self.record_size).min(self.data.len());
        Some(&self.data[start..end])
    }

    pub fn info(&self) -> FontInfo {
        FontInfo {
            byte_count: self.data.len(),
            glyph_count: self.count,
            record_size: self.record_size,
            trailing_bytes: self.data.len().saturating_sub(self.count * self.record_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_slicing() {
        let mut data = vec![0u8; GLYPH_COUNT * GLYPH_HEIGHT];
        data[8] = 0x7E;
        data[15] = 0x81;
        let font = FontTable::new(data, GLYPH_COUNT);

        assert_eq!(font.len(), GLYPH_COUNT);
        let glyph = font.glyph(1).unwrap();
        assert_eq!(glyph.len(), GLYPH_HEIGHT);
        assert_eq!(glyph[0], 0x7E);
        assert_eq!(glyph[7], 0x81);
    }

    #[test]
    fn test_glyph_out_of_range() {
        let font = FontTable::new(vec![0u8; GLYPH_COUNT * GLYPH_HEIGHT], GLYPH_COUNT);
        assert!(font.glyph(GLYPH_COUNT).is_none());
        assert!(font.glyph(usize::MAX).is_none());
    }

    #[test]
    fn test_truncated_tail_records() {
        // 20 bytes configured as 4 glyphs: two full, one half, one empty.
        let font = FontTable::new((0..20).collect(), 4);
        assert_eq!(font.glyph(0).unwrap().len(), 8);
        assert_eq!(font.glyph(1).unwrap().len(), 8);
        assert_eq!(font.glyph(2).unwrap(), &[16, 17, 18, 19]);
        assert_eq!(font.glyph(3).unwrap().len(), 0);
    }

    #[test]
    fn test_info_trailing_bytes() {
        // The reference ROM carries 259 records' worth of data; with the
        // canonical 256-glyph view the 3 extra records show up as 24
        // trailing bytes.
        let font = FontTable::new(vec![0u8; 259 * GLYPH_HEIGHT], GLYPH_COUNT);
        let info = font.info();
        assert_eq!(info.byte_count, 2072);
        assert_eq!(info.glyph_count, 256);
        assert_eq!(info.record_size, 8);
        assert_eq!(info.trailing_bytes, 24);
    }

    #[test]
    fn test_info_no_trailing_bytes_when_short() {
        let font = FontTable::new(vec![0u8; 16], 4);
        assert_eq!(font.info().trailing_bytes, 0);
    }
}
