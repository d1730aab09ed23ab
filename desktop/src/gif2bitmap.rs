use std::path::{Path, PathBuf};

use argh::FromArgs;
use log::{error, info};
use mochi_core::{
    bitmap::DEFAULT_THRESHOLD,
    framebuffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
};
use mochi_tools::{Converter, ConverterConfig};

#[derive(FromArgs)]
/// Convert animated GIFs into monochrome bitmap headers for the display firmware
struct Args {
    /// input GIF file, or a directory together with --batch
    #[argh(positional)]
    input: String,

    /// output .h file path (default: <name>_bitmap.h next to the input)
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// target width in pixels
    #[argh(option, short = 'w', default = "DEFAULT_WIDTH as u32")]
    width: u32,

    /// target height in pixels
    #[argh(option, short = 'H', default = "DEFAULT_HEIGHT as u32")]
    height: u32,

    /// brightness threshold 0-255, lower means more black pixels
    #[argh(option, short = 't', default = "DEFAULT_THRESHOLD")]
    threshold: u8,

    /// maximum number of frames to extract
    #[argh(option, short = 'm')]
    max_frames: Option<usize>,

    /// convert every GIF in the input directory
    #[argh(switch, short = 'b')]
    batch: bool,

    /// output directory for batch conversion (default: <input>/bitmaps)
    #[argh(option)]
    output_dir: Option<String>,

    /// also write a PNG preview of the converted frames
    #[argh(switch, short = 'p')]
    preview: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let converter = Converter::new(ConverterConfig {
        width: args.width,
        height: args.height,
        threshold: args.threshold,
        max_frames: args.max_frames,
        preview: args.preview,
    });
    let input = PathBuf::from(&args.input);

    let code = if args.batch {
        run_batch(&converter, &input, args.output_dir.as_deref().map(Path::new))
    } else {
        run_single(&converter, &input, args.output.as_deref().map(Path::new))
    };
    std::process::exit(code);
}

fn run_batch(converter: &Converter, input: &Path, output_dir: Option<&Path>) -> i32 {
    match converter.convert_dir(input, output_dir) {
        Ok(_) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    }
}

fn run_single(converter: &Converter, input: &Path, output: Option<&Path>) -> i32 {
    match converter.convert_file(input, output) {
        Ok(report) => {
            info!("Conversion complete!");
            info!("Input:  {}", report.input.display());
            info!("Output: {}", report.output.display());
            info!("Frames: {}", report.frames);
            info!("Size:   {}x{}", report.width, report.height);
            0
        }
        Err(err) => {
            error!("{err}");
            1
        }
    }
}
