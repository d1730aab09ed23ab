use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use image::{
    AnimationDecoder, Delay, DynamicImage, Frame, Luma, GrayImage,
    codecs::gif::{GifDecoder, GifEncoder, Repeat},
};
use log::{debug, trace};
use mochi_core::{Canvas, header::DEFAULT_DURATION_MS};

use crate::error::Result;

/// One decoded frame of the source animation.
pub struct SourceFrame {
    pub image: DynamicImage,
    pub duration_ms: u16,
}

/// Reads every frame of `path`, up to `max_frames` (`None` or `Some(0)` means all).
///
/// GIFs are decoded as animations with each frame composited onto the full
/// logical screen. Anything else `image` can open is a single frame.
pub fn load_frames(path: &Path, max_frames: Option<usize>) -> Result<Vec<SourceFrame>> {
    let limit = match max_frames {
        Some(0) | None => usize::MAX,
        Some(limit) => limit,
    };

    let is_gif = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
    if !is_gif {
        debug!("Opening {} as a still image", path.display());
        let image = image::open(path)?;
        return Ok(vec![SourceFrame {
            image,
            duration_ms: DEFAULT_DURATION_MS,
        }]);
    }

    let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
    let mut frames = Vec::new();
    for frame in decoder.into_frames().take(limit) {
        let frame = frame?;
        let duration_ms = delay_ms(frame.delay());
        trace!("Decoded frame {} ({}ms)", frames.len(), duration_ms);
        frames.push(SourceFrame {
            image: DynamicImage::ImageRgba8(frame.into_buffer()),
            duration_ms,
        });
    }
    Ok(frames)
}

/// A zero delay is what decoders report when the file has none.
///
/// `image` cannot tell a missing delay from an explicit 0 ms one, so an
/// explicit zero is also written out as the 100 ms default.
fn delay_ms(delay: Delay) -> u16 {
    let (numer, denom) = delay.numer_denom_ms();
    let ms = numer / denom.max(1);
    if ms == 0 {
        DEFAULT_DURATION_MS
    } else {
        ms.min(u16::MAX as u32) as u16
    }
}

/// Writes the canvases as an endlessly looping GIF.
pub fn save_gif(path: &Path, canvases: &[Canvas], delay_ms: u16) -> Result<()> {
    let mut encoder = GifEncoder::new(BufWriter::new(File::create(path)?));
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(delay_ms as u32, 1);
    let frames = canvases.iter().map(|canvas| {
        let gray = canvas_to_gray(canvas);
        Frame::from_parts(DynamicImage::ImageLuma8(gray).into_rgba8(), 0, 0, delay)
    });
    encoder.encode_frames(frames)?;
    Ok(())
}

pub fn canvas_to_gray(canvas: &Canvas) -> GrayImage {
    let (width, height) = (canvas.width() as u32, canvas.height() as u32);
    GrayImage::from_raw(width, height, canvas.to_luma())
        .unwrap_or_else(|| GrayImage::from_pixel(width, height, Luma([0xFF])))
}
