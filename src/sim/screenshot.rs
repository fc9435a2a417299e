/// MAZECAST Project
/// `File` sim/screenshot.rs
/// `Description` Cell grid PNG screenshot module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::io::{BufWriter, Write};
use std::path::Path;

use mazecast::device::CellBuffer;

use super::font::Font;
use super::surface::Surface;

/// Screenshot saving error
#[derive(Debug, thiserror::Error)]
pub enum ScreenshotError {
    #[error("screenshot file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
} // enum ScreenshotError

/// Grid PNG writing function, one glyph pixel per image pixel
/// * `writer` - PNG stream destination
/// * `cells` - grid to write
/// * `font` - font to draw grid with
pub fn write_png<O: Write, const W: usize, const H: usize>(writer: O, cells: &CellBuffer<W, H>, font: &Font) -> Result<(), ScreenshotError> {
    let letter = font.get_letter_size();
    let (width, height) = (W * letter.width, H * letter.height);

    let mut pixels = vec![0u32; width * height];
    let mut image = Vec::with_capacity(width * height * 3);

    if let Some(mut surface) = Surface::new(&mut pixels, width, height, width) {
        font.put_grid(&mut surface, cells, 1);

        for y in 0..height {
            for x in 0..width {
                let pixel = surface.get_pixel(x, y).unwrap_or_default();
                image.extend_from_slice(&pixel.to_be_bytes()[1..]);
            }
        }
    }

    let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image)?;
    png_writer.finish()?;

    Ok(())
} // fn write_png

/// Grid PNG file saving function
/// * `path` - file to create
/// * `cells` - grid to save
/// * `font` - font to draw grid with
pub fn save_png<const W: usize, const H: usize>(path: &Path, cells: &CellBuffer<W, H>, font: &Font) -> Result<(), ScreenshotError> {
    let file = std::fs::File::create(path)?;
    write_png(BufWriter::new(file), cells, font)
} // fn save_png

#[cfg(test)]
mod tests {
    use super::*;
    use mazecast::device::{glyph, Display};

    #[test]
    fn png_has_glyph_resolution() {
        let font = Font::builtin().unwrap();
        let mut cells = CellBuffer::<3, 2>::new();
        for _ in 0..6 {
            cells.put(glyph::DENSE);
        }

        let mut bytes = Vec::new();
        write_png(&mut bytes, &cells, &font).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (24, 16));
        assert_eq!(reader.info().color_type, png::ColorType::Rgb);

        let mut image = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut image).unwrap();
        // dense glyph row 0 is 0xDD: pixel 0 lit, pixel 2 dark
        assert_eq!(image[0..3], [0xB0, 0xB0, 0xB0]);
        assert_eq!(image[6..9], [0, 0, 0]);
    }
}

// file screenshot.rs
