use std::path::Path;

use embedded_graphics::pixelcolor::BinaryColor;
use image::{GrayImage, Luma};
use log::info;
use mochi_core::PackedBitmap;

use crate::error::Result;

/// Gap between frames in the strip, drawn in mid grey.
const SEPARATOR: u32 = 1;

/// Renders the packed frames as they will appear on the panel, stacked top to
/// bottom.
pub fn render_strip(frames: &[PackedBitmap]) -> GrayImage {
    let width = frames.iter().map(PackedBitmap::width).max().unwrap_or(0) as u32;
    let rows: u32 = frames.iter().map(|f| f.height() as u32).sum();
    let gaps = frames.len().saturating_sub(1) as u32 * SEPARATOR;
    let mut strip = GrayImage::from_pixel(width, rows + gaps, Luma([0x80]));

    let mut top = 0u32;
    for frame in frames {
        let grid = frame.unpack();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let value = match grid.get(x, y) {
                    Some(BinaryColor::On) => 0xFF,
                    _ => 0x00,
                };
                strip.put_pixel(x as u32, top + y as u32, Luma([value]));
            }
        }
        top += frame.height() as u32 + SEPARATOR;
    }
    strip
}

pub fn save_preview(path: &Path, frames: &[PackedBitmap]) -> Result<()> {
    render_strip(frames).save(path)?;
    info!("  Preview: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use mochi_core::BinaryGrid;

    use super::*;

    #[test]
    fn strip_stacks_frames_with_separator() {
        let white = BinaryGrid::filled(10, 2, BinaryColor::On).pack();
        let black = BinaryGrid::filled(10, 2, BinaryColor::Off).pack();
        let strip = render_strip(&[white, black]);
        assert_eq!(strip.dimensions(), (10, 5));
        assert_eq!(strip.get_pixel(9, 1)[0], 0xFF);
        assert_eq!(strip.get_pixel(0, 2)[0], 0x80);
        assert_eq!(strip.get_pixel(9, 4)[0], 0x00);
    }
}
