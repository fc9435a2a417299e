/// MAZECAST Project
/// `File` sim/font.rs
/// `Description` Bitmap font module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use mazecast::device::{glyph, CellBuffer};
use mazecast::math::Ext2su;

use super::surface::Surface;

/// Text color
pub const FOREGROUND: u32 = 0xB0B0B0;
/// Goal glyph color
pub const HIGHLIGHT: u32 = 0xFFD040;
pub const BACKGROUND: u32 = 0x000000;

/// Font loading error
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FontLoadingError {
    #[error("font data is {actual} bytes long, {required} expected")]
    InappropriateDataSize { required: usize, actual: usize },
    #[error("glyph width requires stride of at least {minimal_required} bytes")]
    InappropriateStride { minimal_required: usize },
    #[error("glyph stride exceeds 8 bytes")]
    TooLargeStride,
} // enum FontLoadingError

/// Built-in 8x8 glyphs, rows top to bottom, leftmost pixel in the high bit
const BUILTIN_GLYPHS: [(u8, [u8; 8]); 6] = [
    (glyph::SPARSE, [0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22]),
    (glyph::MEDIUM, [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55]),
    (glyph::DENSE, [0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77]),
    (b'#', [0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00]),
    (b'X', [0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6, 0x00]),
    (b'|', [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00]),
];

/// '?', also used for every glyph not listed above
const FALLBACK_GLYPH: [u8; 8] = [0x7C, 0xC6, 0x0C, 0x18, 0x18, 0x00, 0x18, 0x00];

/// Font representation structure
pub struct Font {
    width: usize,
    height: usize,
    stride: usize,
    letter_stride: usize,
    bits: Vec<u8>,
} // struct Font

impl Font {
    /// .FNT file bytes construction function
    /// * `width_bits` - font width in bits
    /// * `height` - font height
    /// * `stride` - glyph row bytes
    /// * `fnt_bytes` - 256 glyphs, row-major
    /// * Returns font or .FNT file loading error
    pub fn from_fnt_bytes(width_bits: u32, height: u32, stride: u32, fnt_bytes: &[u8]) -> Result<Self, FontLoadingError> {
        if stride > 8 {
            return Err(FontLoadingError::TooLargeStride);
        }

        let required = (height * stride) as usize * 256;
        if required != fnt_bytes.len() {
            return Err(FontLoadingError::InappropriateDataSize { required, actual: fnt_bytes.len() });
        }

        if width_bits > stride * 8 {
            return Err(FontLoadingError::InappropriateStride {
                minimal_required: width_bits.div_ceil(8) as usize,
            });
        }

        Ok(Font {
            width: width_bits as usize,
            height: height as usize,
            stride: stride as usize,
            letter_stride: (height * stride) as usize,
            bits: fnt_bytes.to_vec(),
        })
    } // fn from_fnt_bytes

    /// Built-in font with the glyphs the renderer emits
    pub fn builtin() -> Result<Self, FontLoadingError> {
        let mut fnt_bytes = FALLBACK_GLYPH.repeat(256);

        fnt_bytes[glyph::SPACE as usize * 8..][..8].fill(0);
        for (code, rows) in BUILTIN_GLYPHS {
            fnt_bytes[code as usize * 8..][..8].copy_from_slice(&rows);
        }

        Self::from_fnt_bytes(8, 8, 1, &fnt_bytes)
    } // fn builtin

    /// Font size getting function
    /// * Returns letter extent
    pub fn get_letter_size(&self) -> Ext2su {
        Ext2su {
            width: self.width,
            height: self.height,
        }
    } // fn get_letter_size

    /// Glyph pixel checking function
    /// * `ch` - character
    /// * `x`, `y` - pixel inside glyph
    pub fn is_set(&self, ch: u8, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let row_start = ch as usize * self.letter_stride + y * self.stride;
        let row = self.bits[row_start..row_start + self.stride]
            .iter()
            .fold(0u64, |row, byte| (row << 8) | *byte as u64);

        (row >> (self.stride * 8 - 1 - x)) & 1 == 1
    } // fn is_set

    /// Character putting function
    /// * `surface` - surface to render character to
    /// * `x`, `y` - character top-left corner
    /// * `ch` - character
    /// * `scale` - pixel size
    /// * `color` - character color
    pub fn put_char(&self, surface: &mut Surface, x: usize, y: usize, ch: u8, scale: usize, color: u32) {
        for gy in 0..self.height {
            for gx in 0..self.width {
                if self.is_set(ch, gx, gy) {
                    let (px, py) = (x + gx * scale, y + gy * scale);
                    surface.draw_bar(px, py, px + scale, py + scale, color);
                }
            }
        }
    } // fn put_char

    /// Cell grid rendering function, grid is centered on the surface
    /// * `surface` - surface to render grid to
    /// * `cells` - cell grid
    /// * `scale` - glyph pixel size
    pub fn put_grid<const W: usize, const H: usize>(&self, surface: &mut Surface, cells: &CellBuffer<W, H>, scale: usize) {
        let ext = surface.get_extent();
        let (cell_width, cell_height) = (self.width * scale, self.height * scale);
        let x0 = ext.width.saturating_sub(W * cell_width) / 2;
        let y0 = ext.height.saturating_sub(H * cell_height) / 2;

        surface.clear(BACKGROUND);

        for (y, row) in cells.rows().iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let color = match cell {
                    glyph::GOAL_FACE | glyph::GOAL_SIDE => HIGHLIGHT,
                    _ => FOREGROUND,
                };
                self.put_char(surface, x0 + x * cell_width, y0 + y * cell_height, cell, scale, color);
            }
        }
    } // fn put_grid

    /// Largest integer scale grid fits into extent with
    pub fn fit_scale<const W: usize, const H: usize>(&self, extent: Ext2su) -> usize {
        (extent.width / (W * self.width))
            .min(extent.height / (H * self.height))
            .max(1)
    } // fn fit_scale
} // impl Font


// file font.rs
