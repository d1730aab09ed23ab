use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, error, info};
use mochi_core::{
    BinaryGrid, PackedBitmap,
    bitmap::DEFAULT_THRESHOLD,
    framebuffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    header::emit_header,
};

use crate::{
    error::{Error, Result},
    frames::load_frames,
    normalize::normalize,
    preview::save_preview,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels brighter than this become white.
    pub threshold: u8,
    pub max_frames: Option<usize>,
    /// Also write `<name>_preview.png` next to each header.
    pub preview: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as u32,
            height: DEFAULT_HEIGHT as u32,
            threshold: DEFAULT_THRESHOLD,
            max_frames: None,
            preview: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub frames: usize,
    pub width: u32,
    pub height: u32,
    pub total_bytes: usize,
    pub total_duration_ms: u64,
}

#[derive(Debug)]
pub struct BatchSummary {
    pub output_dir: PathBuf,
    pub total: usize,
    pub converted: Vec<ConversionReport>,
    pub failed: Vec<(PathBuf, Error)>,
}

pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Letterbox, threshold and pack a single frame.
    pub fn process_frame(&self, frame: &DynamicImage) -> Result<PackedBitmap> {
        let ConverterConfig {
            width,
            height,
            threshold,
            ..
        } = self.config;
        let gray = normalize(frame, width, height);
        let grid = BinaryGrid::from_luma(
            width as usize,
            height as usize,
            gray.as_raw(),
            threshold,
        )?;
        Ok(grid.pack())
    }

    /// Converts one animation into a header at `output`, or at
    /// `<input dir>/<stem>_bitmap.h` when no output is given.
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<ConversionReport> {
        if !input.exists() {
            return Err(Error::NotFound(input.to_path_buf()));
        }
        if !input.is_file() {
            return Err(Error::NotAFile(input.to_path_buf()));
        }
        let output = match output {
            Some(path) => path.to_path_buf(),
            None => default_output_path(input),
        };
        let name = file_stem(input);
        info!("Processing: {}", input.display());

        let source = load_frames(input, self.config.max_frames)?;
        let mut frames = Vec::with_capacity(source.len());
        let mut durations = Vec::with_capacity(source.len());
        for (i, frame) in source.iter().enumerate() {
            frames.push(self.process_frame(&frame.image)?);
            durations.push(frame.duration_ms);
            debug!(
                "  Frame {}/{} processed (duration: {}ms)",
                i + 1,
                source.len(),
                frame.duration_ms
            );
        }

        let header = emit_header(
            &name,
            &frames,
            &durations,
            self.config.width as usize,
            self.config.height as usize,
        )?;
        std::fs::write(&output, &header.text)?;
        info!("Generated: {}", output.display());
        info!("  Total size: {} bytes", header.total_bytes);
        info!("  Animation duration: {}ms", header.total_duration_ms);

        if self.config.preview {
            save_preview(&output.with_file_name(format!("{name}_preview.png")), &frames)?;
        }

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output,
            frames: header.frame_count,
            width: self.config.width,
            height: self.config.height,
            total_bytes: header.total_bytes,
            total_duration_ms: header.total_duration_ms,
        })
    }

    /// Converts every `*.gif` in `dir`, in name order.
    ///
    /// A file that fails is logged and recorded in the summary; the remaining
    /// files are still converted.
    pub fn convert_dir(&self, dir: &Path, output_dir: Option<&Path>) -> Result<BatchSummary> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }
        let inputs = find_gifs(dir)?;
        if inputs.is_empty() {
            return Err(Error::NoInputFiles(dir.to_path_buf()));
        }
        info!("Found {} GIF files", inputs.len());

        let output_dir = match output_dir {
            Some(path) => path.to_path_buf(),
            None => dir.join("bitmaps"),
        };
        std::fs::create_dir_all(&output_dir)?;

        let mut summary = BatchSummary {
            output_dir,
            total: inputs.len(),
            converted: Vec::new(),
            failed: Vec::new(),
        };
        for input in inputs {
            let output = summary
                .output_dir
                .join(format!("{}_bitmap.h", file_stem(&input)));
            match self.convert_file(&input, Some(&output)) {
                Ok(report) => summary.converted.push(report),
                Err(err) => {
                    error!("Error processing {}: {}", input.display(), err);
                    summary.failed.push((input, err));
                }
            }
        }
        info!(
            "Conversion complete! {}/{} files converted",
            summary.converted.len(),
            summary.total
        );
        info!("Output directory: {}", summary.output_dir.display());
        Ok(summary)
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = format!("{}_bitmap.h", file_stem(input));
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// GIF files directly inside `dir`, sorted by name.
pub fn find_gifs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut gifs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_gif = path.extension().is_some_and(|ext| ext == "gif");
        if is_gif && path.is_file() {
            gifs.push(path);
        }
    }
    gifs.sort();
    Ok(gifs)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
