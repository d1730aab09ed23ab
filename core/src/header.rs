//! C header generation for the display firmware.
//!
//! The layout matches what the firmware's animation table expects: one
//! `PROGMEM` byte array per frame, a pointer table, a `uint16_t` duration table
//! and `<NAME>_FRAMES`/`<NAME>_WIDTH`/`<NAME>_HEIGHT` defines.

use core::fmt::{self, Write};

use crate::bitmap::{PackedBitmap, packed_len};

/// Frame delay used when the source image carries none.
pub const DEFAULT_DURATION_MS: u16 = 100;

const BYTES_PER_LINE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    NoFrames,
    DurationMismatch { frames: usize, durations: usize },
    FrameSize { index: usize, expected: usize, actual: usize },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::NoFrames => write!(f, "animation has no frames"),
            HeaderError::DurationMismatch { frames, durations } => write!(
                f,
                "{frames} frames but {durations} durations"
            ),
            HeaderError::FrameSize {
                index,
                expected,
                actual,
            } => write!(
                f,
                "frame {index} is {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for HeaderError {}

/// Rendered header plus the numbers worth reporting to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub identifier: String,
    pub text: String,
    pub frame_count: usize,
    pub total_bytes: usize,
    pub total_duration_ms: u64,
}

/// Turns a file stem into a C identifier: anything that is not alphanumeric
/// becomes `_`, then everything is lower-cased.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn emit_header(
    name: &str,
    frames: &[PackedBitmap],
    durations: &[u16],
    width: usize,
    height: usize,
) -> Result<Header, HeaderError> {
    if frames.is_empty() {
        return Err(HeaderError::NoFrames);
    }
    if frames.len() != durations.len() {
        return Err(HeaderError::DurationMismatch {
            frames: frames.len(),
            durations: durations.len(),
        });
    }
    let expected = packed_len(width, height);
    for (index, frame) in frames.iter().enumerate() {
        if frame.len() != expected {
            return Err(HeaderError::FrameSize {
                index,
                expected,
                actual: frame.len(),
            });
        }
    }

    let identifier = sanitize_identifier(name);
    let mut text = String::new();
    // Writing into a String cannot fail.
    write_header(&mut text, name, &identifier, frames, durations, width, height).ok();

    Ok(Header {
        identifier,
        text,
        frame_count: frames.len(),
        total_bytes: frames.len() * expected,
        total_duration_ms: durations.iter().map(|&d| d as u64).sum(),
    })
}

fn write_header(
    out: &mut String,
    name: &str,
    ident: &str,
    frames: &[PackedBitmap],
    durations: &[u16],
    width: usize,
    height: usize,
) -> fmt::Result {
    let guard = ident.to_uppercase();
    writeln!(out, "// Auto-generated bitmap data from {name}.gif")?;
    writeln!(out, "// Frames: {}, Size: {width}x{height}", frames.len())?;
    writeln!(out, "// Generated by gif2bitmap")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {guard}_BITMAP_H")?;
    writeln!(out, "#define {guard}_BITMAP_H")?;
    writeln!(out)?;
    writeln!(out, "#include <Arduino.h>")?;
    writeln!(out)?;
    writeln!(out, "// Animation properties")?;
    writeln!(out, "#define {guard}_FRAMES {}", frames.len())?;
    writeln!(out, "#define {guard}_WIDTH {width}")?;
    writeln!(out, "#define {guard}_HEIGHT {height}")?;
    writeln!(out)?;

    for (i, (frame, duration)) in frames.iter().zip(durations).enumerate() {
        writeln!(out, "// Frame {i} (duration: {duration}ms)")?;
        write_byte_array(out, &format!("{ident}_frame{i}"), frame.as_bytes())?;
        writeln!(out)?;
    }

    writeln!(out, "// Array of frame pointers")?;
    writeln!(out, "const unsigned char* {ident}_frames[] PROGMEM = {{")?;
    for i in 0..frames.len() {
        let comma = if i + 1 < frames.len() { "," } else { "" };
        writeln!(out, "  {ident}_frame{i}{comma}")?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "// Frame durations in milliseconds")?;
    writeln!(out, "const uint16_t {ident}_durations[] PROGMEM = {{")?;
    let list = durations
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "  {list}")?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "#endif // {guard}_BITMAP_H")
}

fn write_byte_array(out: &mut String, array_name: &str, bytes: &[u8]) -> fmt::Result {
    writeln!(out, "const unsigned char {array_name}[] PROGMEM = {{")?;
    let mut lines = bytes.chunks(BYTES_PER_LINE).peekable();
    while let Some(chunk) = lines.next() {
        let values = chunk
            .iter()
            .map(|b| format!("0x{b:02X}"))
            .collect::<Vec<_>>()
            .join(", ");
        let comma = if lines.peek().is_some() { "," } else { "" };
        writeln!(out, "  {values}{comma}")?;
    }
    writeln!(out, "}};")
}
