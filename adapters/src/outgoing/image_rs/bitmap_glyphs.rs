//! 5x7 glyphs for rendering without any font file.
//!
//! Each row is five bits wide with bit 4 as the leftmost column. Glyphs are
//! drawn at [`SCALE`] into a cell of `FALLBACK_CHAR_WIDTH_PX` by
//! `FALLBACK_TEXT_HEIGHT_PX`, so bitmap text measures exactly like the
//! fontless size estimate.

use domain::layout::{FALLBACK_CHAR_WIDTH_PX, FALLBACK_TEXT_HEIGHT_PX};

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
pub const SCALE: u32 = 3;

/// Offset of the scaled glyph inside its cell.
pub const CELL_PAD_X: u32 = (FALLBACK_CHAR_WIDTH_PX - GLYPH_COLUMNS * SCALE) / 2;
pub const CELL_PAD_Y: u32 = (FALLBACK_TEXT_HEIGHT_PX - GLYPH_ROWS * SCALE) / 2;

type Glyph = [u8; 7];

const BLANK: Glyph = [0x00; 7];
const BOX: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

fn punctuation(c: char) -> Option<Glyph> {
    let glyph = match c {
        ' ' => BLANK,
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        _ => return None,
    };
    Some(glyph)
}

/// Lowercase letters fold to uppercase; anything unknown renders as a box.
pub fn glyph_for(c: char) -> Glyph {
    let upper = c.to_ascii_uppercase();
    let table_entry = match upper {
        'A'..='Z' => LETTERS.get(usize::from(upper as u8 - b'A')).copied(),
        '0'..='9' => DIGITS.get(usize::from(upper as u8 - b'0')).copied(),
        _ => punctuation(upper),
    };
    table_entry.unwrap_or(BOX)
}

/// Calls `plot` with every lit pixel of `c`, relative to the cell's top-left.
pub fn for_each_lit_pixel(c: char, mut plot: impl FnMut(u32, u32)) {
    for (row, bits) in (0..GLYPH_ROWS).zip(glyph_for(c)) {
        for col in 0..GLYPH_COLUMNS {
            if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                continue;
            }
            for dy in 0..SCALE {
                for dx in 0..SCALE {
                    plot(
                        CELL_PAD_X + col * SCALE + dx,
                        CELL_PAD_Y + row * SCALE + dy,
                    );
                }
            }
        }
    }
}
