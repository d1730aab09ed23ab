use image::{DynamicImage, GenericImageView, GrayImage, Luma, Rgb, RgbImage, imageops};

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Largest size with the same aspect ratio as `width`x`height` that fits in
/// the target box. Never grows the image.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (width <= max_width && height <= max_height) {
        return (width, height);
    }
    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let scaled_width = ((width as f64 * scale).round() as u32).clamp(1, max_width.max(1));
    let scaled_height = ((height as f64 * scale).round() as u32).clamp(1, max_height.max(1));
    (scaled_width, scaled_height)
}

/// Composites any transparency onto white.
pub fn flatten(frame: &DynamicImage) -> RgbImage {
    let rgba = frame.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| ((c as u32 * a as u32 + 0xFF * (0xFF - a as u32)) / 0xFF) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Shrinks `frame` to fit `width`x`height` and centres it on a white canvas.
///
/// Offsets round down, so odd leftovers end up on the right and bottom.
pub fn letterbox(frame: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (frame_width, frame_height) = frame.dimensions();
    let (scaled_width, scaled_height) = fit_within(frame_width, frame_height, width, height);

    let flat = flatten(frame);
    let scaled = if (scaled_width, scaled_height) == (frame_width, frame_height) {
        flat
    } else {
        imageops::resize(
            &flat,
            scaled_width,
            scaled_height,
            imageops::FilterType::Lanczos3,
        )
    };

    let mut canvas = RgbImage::from_pixel(width, height, WHITE);
    let offset_x = width.saturating_sub(scaled.width()) / 2;
    let offset_y = height.saturating_sub(scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, offset_x as i64, offset_y as i64);
    canvas
}

/// ITU-R 601 luma in 16.16 fixed point, rounded. Existing firmware headers
/// were generated with these weights, so pixels near the threshold must land
/// on the same side.
pub fn luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

pub fn to_gray(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(*image.get_pixel(x, y))])
    })
}

/// Letterboxes the frame and reduces it to one intensity channel.
pub fn normalize(frame: &DynamicImage, width: u32, height: u32) -> GrayImage {
    to_gray(&letterbox(frame, width, height))
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    /// Bounding box of every non-white pixel: (min_x, min_y, max_x, max_y).
    fn ink_bounds(image: &GrayImage) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel[0] < 128 {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
                });
            }
        }
        bounds
    }

    #[test]
    fn fit_keeps_aspect_and_never_upscales() {
        assert_eq!(fit_within(256, 128, 128, 64), (128, 64));
        assert_eq!(fit_within(200, 50, 128, 64), (128, 32));
        assert_eq!(fit_within(64, 256, 128, 64), (16, 64));
        assert_eq!(fit_within(64, 32, 128, 64), (64, 32));
        assert_eq!(fit_within(128, 64, 128, 64), (128, 64));
        assert_eq!(fit_within(10_000, 1, 128, 64), (128, 1));
    }

    #[test]
    fn small_frames_are_centered_not_scaled() {
        let out = normalize(&solid(64, 32, 0), 128, 64);
        assert_eq!(out.dimensions(), (128, 64));
        assert_eq!(ink_bounds(&out), Some((32, 16, 95, 47)));
    }

    #[test]
    fn odd_leftover_goes_bottom_right() {
        let out = normalize(&solid(125, 61, 0), 128, 64);
        // (128 - 125) / 2 = 1, (64 - 61) / 2 = 1
        assert_eq!(ink_bounds(&out), Some((1, 1, 125, 61)));
    }

    #[test]
    fn wide_frames_are_scaled_down_and_centered() {
        let out = normalize(&solid(200, 50, 0), 128, 64);
        assert_eq!(out.dimensions(), (128, 64));
        let (min_x, min_y, max_x, max_y) = ink_bounds(&out).unwrap();
        assert_eq!((min_x, max_x), (0, 127));
        assert_eq!((min_y, max_y), (16, 47));
    }

    #[test]
    fn luma_uses_601_weights() {
        assert_eq!(luma(Rgb([0, 0, 0])), 0);
        assert_eq!(luma(Rgb([255, 255, 255])), 255);
        assert_eq!(luma(Rgb([255, 0, 0])), 76);
        assert_eq!(luma(Rgb([0, 255, 0])), 150);
        assert_eq!(luma(Rgb([0, 0, 255])), 29);
        // Rec. 709 weights would give 117 here.
        assert_eq!(luma(Rgb([255, 80, 80])), 132);
    }

    #[test]
    fn colored_frames_use_601_luma() {
        let red = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([255, 80, 80])));
        let out = normalize(&red, 4, 2);
        assert!(out.pixels().all(|p| p[0] == 132));
    }

    #[test]
    fn transparency_becomes_white() {
        let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));
        let out = normalize(&clear, 8, 8);
        assert!(out.pixels().all(|p| p[0] == 0xFF));
    }
}
