#![cfg_attr(rustfmt, rustfmt_skip)]

use embedded_graphics::pixelcolor::BinaryColor::{self, Off as Black, On as White};

use crate::bitmap::{BitmapError, PackedBitmap, bytes_per_row, classify, packed_len};
use crate::framebuffer::{Canvas, INK};
use crate::header::{HeaderError, emit_header, sanitize_identifier};
use crate::BinaryGrid;

fn checker(width: usize, height: usize) -> BinaryGrid {
    BinaryGrid::from_fn(width, height, |x, y| if (x * 7 + y * 3) % 5 < 2 { White } else { Black })
}

#[test]
fn packed_length_matches_row_stride() {
    for width in [0, 1, 7, 8, 9, 12, 16, 127, 128, 129] {
        for height in [0, 1, 3, 64] {
            let packed = checker(width, height).pack();
            assert_eq!(packed.len(), height * width.div_ceil(8), "{width}x{height}");
            assert_eq!(packed.len(), packed_len(width, height));
        }
    }
    assert_eq!(bytes_per_row(12), 2);
}

#[test]
fn all_white_sets_every_in_range_bit() {
    let packed = BinaryGrid::filled(128, 64, White).pack();
    assert!(packed.as_bytes().iter().all(|&b| b == 0xFF));

    let packed = BinaryGrid::filled(12, 3, White).pack();
    assert_eq!(packed.as_bytes(), &[0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0]);
}

#[test]
fn all_black_is_zero() {
    for width in [5, 8, 12, 128] {
        let packed = BinaryGrid::filled(width, 4, Black).pack();
        assert!(packed.as_bytes().iter().all(|&b| b == 0x00));
    }
}

#[test]
fn leftmost_pixel_is_msb() {
    let mut grid = BinaryGrid::filled(16, 1, Black);
    grid.set(0, 0, White);
    grid.set(9, 0, White);
    grid.set(15, 0, White);
    assert_eq!(grid.pack().as_bytes(), &[0x80, 0x41]);
}

#[test]
fn black_square_at_origin() {
    let grid = BinaryGrid::from_fn(128, 64, |x, y| if x < 8 && y < 8 { Black } else { White });
    let packed = grid.pack();
    let stride = bytes_per_row(128);
    for (y, row) in packed.as_bytes().chunks(stride).enumerate() {
        if y < 8 {
            assert_eq!(row[0], 0x00, "row {y}");
            assert!(row[1..].iter().all(|&b| b == 0xFF), "row {y}");
        } else {
            assert!(row.iter().all(|&b| b == 0xFF), "row {y}");
        }
    }
}

#[test]
fn packing_is_idempotent() {
    let grid = checker(37, 11);
    assert_eq!(grid.pack(), grid.pack());
}

#[test]
fn unpack_restores_grid() {
    for (width, height) in [(13, 5), (8, 8), (128, 64), (1, 1)] {
        let grid = checker(width, height);
        assert_eq!(grid.pack().unpack(), grid);
    }
}

#[test]
fn threshold_is_strict() {
    assert_eq!(classify(128, 128), Black);
    assert_eq!(classify(129, 128), White);
    assert_eq!(classify(0, 0), Black);
    assert_eq!(classify(255, 255), Black);
    assert_eq!(classify(255, 254), White);
}

#[test]
fn threshold_is_monotonic() {
    for threshold in [0u8, 1, 64, 128, 200, 255] {
        let mut seen_white = false;
        for value in 0..=255u8 {
            let color = classify(value, threshold);
            if seen_white {
                assert_eq!(color, White, "value {value} threshold {threshold}");
            }
            seen_white |= color == White;
        }
    }
}

#[test]
fn luma_grid() {
    let luma = [0, 128, 129, 255, 10, 200];
    let grid = BinaryGrid::from_luma(3, 2, &luma, 128).unwrap();
    assert_eq!(grid.get(0, 0), Some(Black));
    assert_eq!(grid.get(1, 0), Some(Black));
    assert_eq!(grid.get(2, 0), Some(White));
    assert_eq!(grid.get(0, 1), Some(White));
    assert_eq!(grid.get(1, 1), Some(Black));
    assert_eq!(grid.get(2, 1), Some(White));
    assert_eq!(grid.get(3, 0), None);

    assert_eq!(
        BinaryGrid::from_luma(3, 3, &luma, 128),
        Err(BitmapError::SizeMismatch { expected: 9, actual: 6 })
    );
}

#[test]
fn packed_bitmap_validates_length() {
    assert!(PackedBitmap::from_bytes(12, 2, vec![0; 4]).is_ok());
    assert_eq!(
        PackedBitmap::from_bytes(12, 2, vec![0; 3]),
        Err(BitmapError::SizeMismatch { expected: 4, actual: 3 })
    );
}

#[test]
fn canvas_matches_grid_packing() {
    let mut canvas = Canvas::new(20, 3);
    let mut grid = BinaryGrid::filled(20, 3, White);
    for (x, y) in [(0, 0), (7, 1), (8, 1), (19, 2)] {
        canvas.set_pixel(x as i32, y as i32, INK);
        grid.set(x, y, INK);
    }
    assert_eq!(canvas.into_packed(), grid.pack());
}

#[test]
fn identifier_sanitizing() {
    assert_eq!(sanitize_identifier("wink"), "wink");
    assert_eq!(sanitize_identifier("Happy Face-2"), "happy_face_2");
    assert_eq!(sanitize_identifier("0"), "0");
    assert_eq!(sanitize_identifier("a.b c"), "a_b_c");
}

fn frame(width: usize, height: usize, color: BinaryColor) -> PackedBitmap {
    BinaryGrid::filled(width, height, color).pack()
}

#[test]
fn header_layout() {
    let frames = [frame(8, 2, White), frame(8, 2, Black)];
    let header = emit_header("My-Anim", &frames, &[60, 120], 8, 2).unwrap();
    let expected = "\
// Auto-generated bitmap data from My-Anim.gif
// Frames: 2, Size: 8x2
// Generated by gif2bitmap

#ifndef MY_ANIM_BITMAP_H
#define MY_ANIM_BITMAP_H

#include <Arduino.h>

// Animation properties
#define MY_ANIM_FRAMES 2
#define MY_ANIM_WIDTH 8
#define MY_ANIM_HEIGHT 2

// Frame 0 (duration: 60ms)
const unsigned char my_anim_frame0[] PROGMEM = {
  0xFF, 0xFF
};

// Frame 1 (duration: 120ms)
const unsigned char my_anim_frame1[] PROGMEM = {
  0x00, 0x00
};

// Array of frame pointers
const unsigned char* my_anim_frames[] PROGMEM = {
  my_anim_frame0,
  my_anim_frame1
};

// Frame durations in milliseconds
const uint16_t my_anim_durations[] PROGMEM = {
  60, 120
};

#endif // MY_ANIM_BITMAP_H
";
    assert_eq!(header.text, expected);
    assert_eq!(header.identifier, "my_anim");
    assert_eq!(header.frame_count, 2);
    assert_eq!(header.total_bytes, 4);
    assert_eq!(header.total_duration_ms, 180);
}

#[test]
fn header_wraps_twelve_bytes_per_line() {
    // 13 bytes per frame.
    let header = emit_header("wrap", &[frame(8, 13, White)], &[100], 8, 13).unwrap();
    let twelve = vec!["0xFF"; 12].join(", ");
    assert!(header.text.contains(&format!(
        "const unsigned char wrap_frame0[] PROGMEM = {{\n  {twelve},\n  0xFF\n}};\n"
    )));
}

#[test]
fn header_uses_uppercase_hex() {
    let mut grid = BinaryGrid::filled(8, 1, Black);
    for x in [0, 2, 4, 5, 6, 7] {
        grid.set(x, 0, White);
    }
    let header = emit_header("hex", &[grid.pack()], &[1], 8, 1).unwrap();
    assert!(header.text.contains("  0xAF\n"));
}

#[test]
fn header_rejects_bad_input() {
    assert_eq!(emit_header("x", &[], &[], 128, 64), Err(HeaderError::NoFrames));
    assert_eq!(
        emit_header("x", &[frame(8, 1, White)], &[1, 2], 8, 1),
        Err(HeaderError::DurationMismatch { frames: 1, durations: 2 })
    );
    assert_eq!(
        emit_header("x", &[frame(8, 1, White), frame(8, 2, White)], &[1, 2], 8, 1),
        Err(HeaderError::FrameSize { index: 1, expected: 1, actual: 2 })
    );
}
