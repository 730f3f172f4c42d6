//! Native command-line driver for the vista viewer session.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vista::assets::loader::FsAssetLoader;
use vista::camera::TransitionStep;
use vista::surface::LogSurface;
use vista::{Options, ViewerSession, VistaError};

/// Fixed simulation step for the preset tour.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Upper bound on frames spent on one view, in case a transition never
/// reports completion.
const MAX_FRAMES_PER_VIEW: usize = 60 * 60;

fn run(options_path: Option<PathBuf>) -> Result<(), VistaError> {
    let (options, root) = match options_path {
        Some(path) => {
            let options = Options::load(&path)?;
            let root = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
            (options, root)
        }
        None => (Options::default(), PathBuf::from(".")),
    };

    let mut session = ViewerSession::new(&options, LogSurface)?;
    let report =
        pollster::block_on(session.load_assets(&FsAssetLoader::new(root)));
    for failure in &report.failures {
        log::error!("{failure}");
    }
    if let Some(first) = report.failures.into_iter().next() {
        return Err(first);
    }
    let total: usize = report.loaded.iter().map(|a| a.bytes.len()).sum();
    log::info!("Loaded {} assets ({total} bytes)", report.loaded.len());

    let names: Vec<String> = session
        .context()
        .presets
        .names()
        .map(str::to_owned)
        .collect();
    for name in names {
        session.go_to_view(&name)?;
        let mut frames = 0;
        while frames < MAX_FRAMES_PER_VIEW {
            frames += 1;
            // Zero-duration views snap in go_to and never report Finished.
            if session.tick(FRAME_DT) != TransitionStep::Moving {
                break;
            }
        }
        let camera = session.camera();
        log::info!(
            "{name}: eye {} target {} after {frames} frames",
            camera.eye,
            camera.target
        );
    }

    session.return_to_default()?;
    while session.tick(FRAME_DT) != TransitionStep::Idle {}
    log::info!("Back at default view: eye {}", session.camera().eye);
    let _ = session.teardown();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().nth(1).map(PathBuf::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
