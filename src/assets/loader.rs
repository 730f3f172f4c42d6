use std::future::Future;
use std::io::Read;
use std::path::PathBuf;

use futures::stream::{FuturesUnordered, StreamExt};

use super::{Readiness, ReadinessObserver, ReadinessTracker};
use crate::error::VistaError;

/// A named asset and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// Name the asset is tracked under.
    pub name: String,
    /// Path or URL handed to the loader.
    pub path: String,
}

impl AssetRequest {
    /// Build a request.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Byte progress of one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    /// Bytes received so far.
    pub loaded: u64,
    /// Total size, when the source reports one.
    pub total: Option<u64>,
}

impl LoadProgress {
    /// Fraction complete in `[0, 1]`, if the total is known.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(1.0),
            Some(total) => Some((self.loaded as f64 / total as f64).min(1.0)),
            None => None,
        }
    }
}

/// A successfully fetched asset. The payload is opaque to this crate;
/// decoding belongs to the host's format loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedAsset {
    /// Name the asset was requested under.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Fetches raw asset bytes.
///
/// Each call resolves exactly once, to the payload or to a human-readable
/// failure cause. `progress` may be invoked any number of times before
/// the future resolves.
pub trait AssetLoader {
    /// Fetch the asset described by `request`.
    fn load(
        &self,
        request: &AssetRequest,
        progress: &dyn Fn(LoadProgress),
    ) -> impl Future<Output = Result<Vec<u8>, String>>;
}

/// Result of driving a batch of loads to completion.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Assets that loaded, in completion order.
    pub loaded: Vec<LoadedAsset>,
    /// One [`VistaError::AssetLoad`] per failed asset.
    pub failures: Vec<VistaError>,
    /// Whether this batch completed the tracker's set.
    pub became_ready: bool,
}

/// Run every request concurrently and report each completion to `tracker`
/// as it arrives.
///
/// Requests must already be registered with the tracker. All loads run on
/// the calling task, so tracker updates are serialized without locking.
/// A tracker error for one request (e.g. an unregistered name) is recorded
/// in [`LoadReport::failures`] and the remaining loads still complete.
pub async fn load_all<L: AssetLoader>(
    loader: &L,
    requests: &[AssetRequest],
    tracker: &mut ReadinessTracker,
    observer: &mut (impl ReadinessObserver + ?Sized),
) -> LoadReport {
    let mut pending: FuturesUnordered<_> = requests
        .iter()
        .map(|request| async move {
            let report = |p: LoadProgress| log_progress(&request.name, p);
            let result = loader.load(request, &report).await;
            (request, result)
        })
        .collect();

    let mut report = LoadReport::default();
    while let Some((request, result)) = pending.next().await {
        match result {
            Ok(bytes) => match tracker.mark_loaded(&request.name, observer) {
                Ok(readiness) => {
                    if readiness == Readiness::BecameReady {
                        report.became_ready = true;
                    }
                    report.loaded.push(LoadedAsset {
                        name: request.name.clone(),
                        bytes,
                    });
                }
                Err(e) => {
                    log::error!("{e}");
                    report.failures.push(e);
                }
            },
            Err(cause) => {
                if let Err(e) = tracker.mark_failed(&request.name, &cause, observer) {
                    log::error!("{e}");
                    report.failures.push(e);
                }
                report.failures.push(VistaError::AssetLoad {
                    name: request.name.clone(),
                    cause,
                });
            }
        }
    }
    report
}

fn log_progress(name: &str, progress: LoadProgress) {
    if let Some(ratio) = progress.ratio() {
        log::debug!("Loading {name}: {:.2}%", ratio * 100.0);
    }
}

/// Loads assets from the local filesystem, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
    chunk_size: usize,
}

impl FsAssetLoader {
    /// Loader resolving request paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            chunk_size: 1 << 20,
        }
    }

    fn read(
        &self,
        request: &AssetRequest,
        progress: &dyn Fn(LoadProgress),
    ) -> std::io::Result<Vec<u8>> {
        let path = self.root.join(&request.path);
        let mut file = std::fs::File::open(&path)?;
        let total = file.metadata().ok().map(|m| m.len());
        let mut bytes = Vec::with_capacity(total.unwrap_or(0) as usize);
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let n = file.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..n]);
            progress(LoadProgress {
                loaded: bytes.len() as u64,
                total,
            });
        }
        Ok(bytes)
    }
}

impl AssetLoader for FsAssetLoader {
    async fn load(
        &self,
        request: &AssetRequest,
        progress: &dyn Fn(LoadProgress),
    ) -> Result<Vec<u8>, String> {
        self.read(request, progress).map_err(|e| e.to_string())
    }
}
