use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;

pub const DEFAULT_THRESHOLD: u8 = 128;

pub fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Size of one packed frame in bytes.
pub fn packed_len(width: usize, height: usize) -> usize {
    bytes_per_row(width) * height
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} bytes of pixel data, got {actual}")
            }
        }
    }
}

impl std::error::Error for BitmapError {}

type Result<T> = core::result::Result<T, BitmapError>;

/// Black and white pixels, row-major. `On` is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    pixels: Vec<BinaryColor>,
}

impl BinaryGrid {
    pub fn filled(width: usize, height: usize, color: BinaryColor) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> BinaryColor,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Classifies 8-bit intensities. A pixel is white only when it is strictly
    /// brighter than `threshold`.
    pub fn from_luma(width: usize, height: usize, luma: &[u8], threshold: u8) -> Result<Self> {
        if luma.len() != width * height {
            return Err(BitmapError::SizeMismatch {
                expected: width * height,
                actual: luma.len(),
            });
        }
        let pixels = luma
            .iter()
            .map(|&value| classify(value, threshold))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, color: BinaryColor) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Packs the grid into horizontal bytes, MSB first.
    ///
    /// Each row starts on a fresh byte. Bits past the right edge of a row stay
    /// clear, i.e. read as black.
    pub fn pack(&self) -> PackedBitmap {
        let stride = bytes_per_row(self.width);
        let mut data = vec![0u8; stride * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[y * self.width + x] == BinaryColor::On {
                    data[y * stride + x / 8] |= 1 << (7 - (x % 8));
                }
            }
        }
        PackedBitmap {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[inline]
pub fn classify(value: u8, threshold: u8) -> BinaryColor {
    if value > threshold {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

/// A frame in display layout, `height * ceil(width / 8)` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PackedBitmap {
    pub fn from_bytes(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = packed_len(width, height);
        if data.len() != expected {
            return Err(BitmapError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_raw_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), packed_len(width, height));
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Expands the bytes back into a grid. Padding bits are dropped.
    pub fn unpack(&self) -> BinaryGrid {
        let stride = bytes_per_row(self.width);
        BinaryGrid::from_fn(self.width, self.height, |x, y| {
            let byte = self.data[y * stride + x / 8];
            if (byte >> (7 - (x % 8))) & 1 == 1 {
                BinaryColor::On
            } else {
                BinaryColor::Off
            }
        })
    }
}
