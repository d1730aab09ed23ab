use std::path::{Path, PathBuf};

use argh::FromArgs;
use log::{error, info};
use mochi_core::{
    animation::{AnimationKind, DEFAULT_FRAMES, FRAME_DELAY_MS},
    framebuffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
};
use mochi_tools::frames::save_gif;

#[derive(FromArgs)]
/// Generate the procedural face animations as GIFs
struct Args {
    /// directory to write the GIFs into
    #[argh(option, default = "String::from(\"custom_gifs\")")]
    output_dir: String,

    /// frames per animation
    #[argh(option, default = "DEFAULT_FRAMES")]
    frames: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let output_dir = PathBuf::from(&args.output_dir);

    match generate_all(&output_dir, args.frames) {
        Ok(created) => print_next_steps(&created),
        Err(err) => {
            error!("Failed to generate animations: {err}");
            std::process::exit(1);
        }
    }
}

fn generate_all(output_dir: &Path, frames: usize) -> mochi_tools::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut created = Vec::new();
    for kind in AnimationKind::all() {
        let canvases = kind.render(frames, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let path = output_dir.join(kind.file_name());
        save_gif(&path, &canvases, FRAME_DELAY_MS)?;
        info!("  Saved: {}", path.display());
        created.push(path);
    }
    Ok(created)
}

fn print_next_steps(created: &[PathBuf]) {
    info!("Created {} new animations!", created.len());
    info!("Next steps:");
    info!("1. Convert to bitmaps:");
    for path in created {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(
            "   gif2bitmap {} -o include/animations/{name}_bitmap.h",
            path.display()
        );
    }
    info!("2. Add the new headers to the firmware's animation table");
    info!("3. Rebuild and flash the firmware");
}
