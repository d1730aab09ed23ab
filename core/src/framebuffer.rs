use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

use crate::bitmap::{PackedBitmap, bytes_per_row};

/// SSD1306 panel size.
pub const DEFAULT_WIDTH: usize = 128;
pub const DEFAULT_HEIGHT: usize = 64;

/// Colour of a lit pixel. A set bit in the packed data is white.
pub const PAPER: BinaryColor = BinaryColor::On;
/// Colour used for strokes and fills.
pub const INK: BinaryColor = BinaryColor::Off;

/// One-bit drawing surface stored in the packed display layout.
///
/// Rows are `ceil(width / 8)` bytes wide, MSB first. Padding bits at the end of
/// each row are kept clear, so the buffer can be handed out as a
/// [`PackedBitmap`] without repacking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Creates a white canvas.
    pub fn new(width: usize, height: usize) -> Self {
        let mut ret = Self {
            width,
            height,
            buffer: vec![0; bytes_per_row(width) * height],
        };
        ret.clear_screen(PAPER);
        ret
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear_screen(&mut self, color: BinaryColor) {
        let stride = bytes_per_row(self.width);
        if stride == 0 {
            return;
        }
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        let tail_mask = match self.width % 8 {
            0 => 0xFF,
            rem => 0xFFu8 << (8 - rem),
        };
        for row in self.buffer.chunks_exact_mut(stride) {
            row.fill(fill);
            row[stride - 1] &= tail_mask;
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let byte_index = y * bytes_per_row(self.width) + x / 8;
        let bit_index = 7 - (x % 8);
        match color {
            BinaryColor::On => self.buffer[byte_index] |= 1 << bit_index,
            BinaryColor::Off => self.buffer[byte_index] &= !(1 << bit_index),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.buffer[y * bytes_per_row(self.width) + x / 8];
        Some(if (byte >> (7 - (x % 8))) & 1 == 1 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    /// Expands the canvas to one byte per pixel (0 or 255), row-major.
    pub fn to_luma(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(match self.pixel(x, y) {
                    Some(BinaryColor::On) => 0xFF,
                    _ => 0x00,
                });
            }
        }
        out
    }

    pub fn into_packed(self) -> PackedBitmap {
        PackedBitmap::from_raw_parts(self.width, self.height, self.buffer)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
