//! Headless replay of recorded touch sessions.
//!
//! `atrium <script.json> [options.toml]` walks the reference gallery
//! through the script and logs where the camera ends up.

use std::path::Path;

use atrium::engine::GalleryEngine;
use atrium::options::Options;
use atrium::replay::ReplayScript;
use atrium::scene::{DirAssetResolver, Gallery};
use atrium::AtriumError;

/// Directory artwork paths are resolved against.
const ASSET_ROOT: &str = "assets";

fn run(script_path: &Path, options_path: Option<&Path>) -> Result<(), AtriumError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = ReplayScript::load(script_path)?;
    let gallery = Gallery::reference(&DirAssetResolver::new(ASSET_ROOT));
    let mut engine = GalleryEngine::new(options, gallery)?;

    let report = script.run(&mut engine);
    log::info!(
        "replay finished: {} moved, {} rejected, {} rotated, {} ignored over {} frames",
        report.moved,
        report.rejected,
        report.rotated,
        report.ignored,
        report.frames
    );
    log::info!(
        "final pose: {} yaw {:.4} ({:?})",
        report.final_pose.position,
        report.final_pose.yaw,
        report.final_state
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(script) = args.next() else {
        log::error!("Usage: atrium <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&script), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
