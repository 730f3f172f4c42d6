//! Multi-asset readiness tracking.
//!
//! A [`ReadinessTracker`] aggregates one completion signal per named asset
//! into a single "all ready" event that fires at most once per session.
//! Completion order does not matter: readiness is an AND over every
//! tracked asset's loaded flag.
//!
//! A failed load leaves its asset pending forever. The tracker never
//! reaches ready in that case, which hosts surface as a stuck or
//! error-labelled loading indicator. There is no retry and no timeout.

/// Async loader abstraction and the concurrent fan-in driver.
pub mod loader;
/// Browser `fetch` loader.
#[cfg(feature = "web")]
pub mod web;

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use crate::error::VistaError;

/// Opaque index of a registered asset, returned by
/// [`ReadinessTracker::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(usize);

impl AssetHandle {
    /// Position of the asset in load-initiation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Load state of a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// Load initiated, no result yet.
    Pending,
    /// Success callback delivered.
    Loaded,
    /// Error callback delivered. Terminal: the asset never becomes loaded.
    Failed(String),
}

/// One asset the viewer waits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    name: String,
    status: AssetStatus,
}

impl TrackedAsset {
    /// Registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the success path has reported this asset.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.status == AssetStatus::Loaded
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &AssetStatus {
        &self.status
    }
}

/// Outcome of reporting a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Other assets are still outstanding.
    Pending,
    /// This report completed the set; the reveal side effect just fired.
    BecameReady,
    /// The set was already complete before this report.
    AlreadyReady,
}

/// Receives the tracker's side effects.
///
/// [`on_all_ready`](Self::on_all_ready) is invoked at most once per
/// tracker, by whichever report first makes every asset loaded.
pub trait ReadinessObserver {
    /// Every expected asset has loaded: hide the loading indicator and
    /// reveal the viewport.
    fn on_all_ready(&mut self);

    /// An asset failed permanently.
    fn on_load_failed(&mut self, _name: &str, _cause: &str) {}
}

/// Fan-in barrier over named asynchronous asset loads.
#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    /// Fixed upfront, or grown by each `register` when `None`.
    fixed_expected: Option<usize>,
    /// Insertion order = load-initiation order.
    assets: Vec<TrackedAsset>,
    by_name: FxHashMap<String, usize>,
    revealed: bool,
}

impl ReadinessTracker {
    /// Tracker whose expected count grows with each registration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that waits for exactly `expected` assets, known statically.
    #[must_use]
    pub fn with_expected(expected: usize) -> Self {
        Self {
            fixed_expected: Some(expected),
            ..Self::default()
        }
    }

    /// Declare that an asset load is being initiated. A tracker with a fixed
    /// expected count rejects registrations beyond it.
    pub fn register(&mut self, name: &str) -> Result<AssetHandle, VistaError> {
        if self.by_name.contains_key(name) {
            return Err(VistaError::DuplicateAsset(name.to_owned()));
        }
        if let Some(expected) = self.fixed_expected {
            if self.assets.len() >= expected {
                return Err(VistaError::UnexpectedAsset {
                    name: name.to_owned(),
                    expected,
                });
            }
        }
        let handle = AssetHandle(self.assets.len());
        self.assets.push(TrackedAsset {
            name: name.to_owned(),
            status: AssetStatus::Pending,
        });
        let _ = self.by_name.insert(name.to_owned(), handle.0);
        log::debug!("Tracking asset {name} ({}/{})", self.assets.len(), self.expected_count());
        Ok(handle)
    }

    /// Number of assets that must load before the viewer is ready.
    #[must_use]
    pub fn expected_count(&self) -> usize {
        self.fixed_expected.unwrap_or(self.assets.len())
    }

    /// Look up the handle of a registered asset.
    #[must_use]
    pub fn handle(&self, name: &str) -> Option<AssetHandle> {
        self.by_name.get(name).copied().map(AssetHandle)
    }

    /// Report a successful load.
    ///
    /// Repeated reports for the same asset are no-ops. The observer's
    /// [`on_all_ready`](ReadinessObserver::on_all_ready) fires only on the
    /// report that completes the set.
    pub fn mark_loaded(
        &mut self,
        name: &str,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<Readiness, VistaError> {
        let idx = self.index_of(name)?;
        self.mark_loaded_at(idx, observer)
    }

    /// [`mark_loaded`](Self::mark_loaded) by handle.
    pub fn mark_loaded_handle(
        &mut self,
        handle: AssetHandle,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<Readiness, VistaError> {
        if handle.0 >= self.assets.len() {
            return Err(VistaError::UnknownAsset(format!("#{}", handle.0)));
        }
        self.mark_loaded_at(handle.0, observer)
    }

    fn mark_loaded_at(
        &mut self,
        idx: usize,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<Readiness, VistaError> {
        let asset = &mut self.assets[idx];
        match asset.status {
            AssetStatus::Loaded => {
                log::warn!("Asset {} reported loaded more than once", asset.name);
            }
            AssetStatus::Failed(_) => {
                log::warn!(
                    "Asset {} reported loaded after failing; ignoring",
                    asset.name
                );
            }
            AssetStatus::Pending => {
                asset.status = AssetStatus::Loaded;
                log::info!("Loaded asset {}", asset.name);
            }
        }

        if self.revealed {
            return Ok(Readiness::AlreadyReady);
        }
        if self.reveal_if_ready(observer) {
            Ok(Readiness::BecameReady)
        } else {
            Ok(Readiness::Pending)
        }
    }

    /// Report a permanent load failure. The asset stays not-loaded.
    pub fn mark_failed(
        &mut self,
        name: &str,
        cause: &str,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<(), VistaError> {
        let idx = self.index_of(name)?;
        let asset = &mut self.assets[idx];
        if asset.is_loaded() {
            log::warn!("Asset {name} reported failed after loading; ignoring");
            return Ok(());
        }
        log::error!("{name} loading failed: {cause}");
        asset.status = AssetStatus::Failed(cause.to_owned());
        observer.on_load_failed(name, cause);
        Ok(())
    }

    /// Fire the reveal if the set is complete and it has not fired yet.
    ///
    /// Needed only for trackers that start out ready, e.g. a fixed
    /// expected count of zero. Returns whether the reveal fired now.
    pub fn reveal_if_ready(
        &mut self,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> bool {
        if self.revealed || !self.is_all_ready() {
            return false;
        }
        self.revealed = true;
        log::info!("All {} assets ready", self.assets.len());
        observer.on_all_ready();
        true
    }

    /// Whether every expected asset has loaded. Pure query.
    #[must_use]
    pub fn is_all_ready(&self) -> bool {
        self.assets.len() == self.expected_count()
            && self.assets.iter().all(TrackedAsset::is_loaded)
    }

    /// Whether the reveal side effect has fired.
    #[must_use]
    pub fn has_revealed(&self) -> bool {
        self.revealed
    }

    /// Tracked assets in load-initiation order.
    #[must_use]
    pub fn assets(&self) -> &[TrackedAsset] {
        &self.assets
    }

    /// Names of assets not yet loaded (pending or failed).
    pub fn outstanding(&self) -> impl Iterator<Item = &str> {
        self.assets
            .iter()
            .filter(|a| !a.is_loaded())
            .map(TrackedAsset::name)
    }

    fn index_of(&self, name: &str) -> Result<usize, VistaError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| VistaError::UnknownAsset(name.to_owned()))
    }
}

/// Thread-safe tracker handle for hosts whose loads complete on worker
/// threads. Every report is serialized through one mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<ReadinessTracker>>,
}

impl SharedTracker {
    /// Wrap an existing tracker.
    #[must_use]
    pub fn new(tracker: ReadinessTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Run `f` with exclusive access to the tracker.
    pub fn with<T>(&self, f: impl FnOnce(&mut ReadinessTracker) -> T) -> T {
        let mut guard =
            self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Serialized [`ReadinessTracker::register`].
    pub fn register(&self, name: &str) -> Result<AssetHandle, VistaError> {
        self.with(|t| t.register(name))
    }

    /// Serialized [`ReadinessTracker::mark_loaded`].
    pub fn mark_loaded(
        &self,
        name: &str,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<Readiness, VistaError> {
        self.with(|t| t.mark_loaded(name, observer))
    }

    /// Serialized [`ReadinessTracker::mark_failed`].
    pub fn mark_failed(
        &self,
        name: &str,
        cause: &str,
        observer: &mut (impl ReadinessObserver + ?Sized),
    ) -> Result<(), VistaError> {
        self.with(|t| t.mark_failed(name, cause, observer))
    }

    /// Serialized [`ReadinessTracker::is_all_ready`].
    #[must_use]
    pub fn is_all_ready(&self) -> bool {
        self.with(|t| t.is_all_ready())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Counts side effects.
    #[derive(Default)]
    pub(crate) struct CountingObserver {
        pub(crate) reveals: u32,
        pub(crate) failures: Vec<String>,
    }

    impl ReadinessObserver for CountingObserver {
        fn on_all_ready(&mut self) {
            self.reveals += 1;
        }

        fn on_load_failed(&mut self, name: &str, _cause: &str) {
            self.failures.push(name.to_owned());
        }
    }

    #[test]
    fn fixed_count_rejects_extra_registration() {
        let mut tracker = ReadinessTracker::with_expected(1);
        let _ = tracker.register("Temple").unwrap();
        assert!(matches!(
            tracker.register("Bird"),
            Err(VistaError::UnexpectedAsset { expected: 1, .. })
        ));
        assert_eq!(tracker.assets().len(), 1);
        assert!(tracker.handle("Bird").is_none());

        let mut obs = CountingObserver::default();
        assert_eq!(
            tracker.mark_loaded("Temple", &mut obs).unwrap(),
            Readiness::BecameReady
        );
        assert_eq!(obs.reveals, 1);
    }

    #[test]
    fn temple_and_bird_reveal_once() {
        let mut tracker = ReadinessTracker::with_expected(2);
        let mut obs = CountingObserver::default();
        let _ = tracker.register("Temple").unwrap();
        let _ = tracker.register("Bird").unwrap();

        assert_eq!(
            tracker.mark_loaded("Bird", &mut obs).unwrap(),
            Readiness::Pending
        );
        assert!(!tracker.is_all_ready());
        assert_eq!(obs.reveals, 0);

        assert_eq!(
            tracker.mark_loaded("Temple", &mut obs).unwrap(),
            Readiness::BecameReady
        );
        assert!(tracker.is_all_ready());
        assert_eq!(obs.reveals, 1);
    }

    #[test]
    fn ready_regardless_of_order() {
        let names = ["a", "b", "c"];
        let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [0, 2, 1]];
        for order in orders {
            let mut tracker = ReadinessTracker::new();
            let mut obs = CountingObserver::default();
            for name in names {
                let _ = tracker.register(name).unwrap();
            }
            for (step, &i) in order.iter().enumerate() {
                assert!(!tracker.is_all_ready(), "ready early at step {step}");
                let _ = tracker.mark_loaded(names[i], &mut obs).unwrap();
            }
            assert!(tracker.is_all_ready());
            assert_eq!(obs.reveals, 1);
        }
    }

    #[test]
    fn reports_after_ready_do_not_repeat_reveal() {
        let mut tracker = ReadinessTracker::new();
        let mut obs = CountingObserver::default();
        let _ = tracker.register("Temple").unwrap();
        let _ = tracker.mark_loaded("Temple", &mut obs).unwrap();
        assert_eq!(
            tracker.mark_loaded("Temple", &mut obs).unwrap(),
            Readiness::AlreadyReady
        );
        assert!(!tracker.reveal_if_ready(&mut obs));
        assert_eq!(obs.reveals, 1);
    }

    #[test]
    fn count_mismatch_never_becomes_ready() {
        let mut tracker = ReadinessTracker::with_expected(3);
        let mut obs = CountingObserver::default();
        let _ = tracker.register("Temple").unwrap();
        let _ = tracker.register("Env").unwrap();
        let _ = tracker.mark_loaded("Temple", &mut obs).unwrap();
        let _ = tracker.mark_loaded("Env", &mut obs).unwrap();
        assert!(!tracker.is_all_ready());
        assert_eq!(obs.reveals, 0);
    }

    #[test]
    fn duplicate_and_unknown_names_are_rejected() {
        let mut tracker = ReadinessTracker::new();
        let mut obs = CountingObserver::default();
        let _ = tracker.register("Temple").unwrap();
        assert!(matches!(
            tracker.register("Temple"),
            Err(VistaError::DuplicateAsset(_))
        ));
        assert!(matches!(
            tracker.mark_loaded("Bird", &mut obs),
            Err(VistaError::UnknownAsset(_))
        ));
        assert!(matches!(
            tracker.mark_loaded_handle(AssetHandle(9), &mut obs),
            Err(VistaError::UnknownAsset(_))
        ));
    }

    #[test]
    fn failure_leaves_tracker_stuck() {
        let mut tracker = ReadinessTracker::new();
        let mut obs = CountingObserver::default();
        let _ = tracker.register("Temple").unwrap();
        let _ = tracker.register("Env").unwrap();
        tracker.mark_failed("Temple", "404", &mut obs).unwrap();
        let _ = tracker.mark_loaded("Env", &mut obs).unwrap();
        // A late success for a failed asset does not unstick it.
        let _ = tracker.mark_loaded("Temple", &mut obs).unwrap();

        assert!(!tracker.is_all_ready());
        assert_eq!(obs.reveals, 0);
        assert_eq!(obs.failures, vec!["Temple".to_owned()]);
        assert_eq!(tracker.outstanding().collect::<Vec<_>>(), vec!["Temple"]);
        assert_eq!(
            tracker.assets()[0].status(),
            &AssetStatus::Failed("404".into())
        );
    }

    #[test]
    fn handles_follow_initiation_order() {
        let mut tracker = ReadinessTracker::new();
        let a = tracker.register("Temple").unwrap();
        let b = tracker.register("Env").unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(tracker.handle("Env"), Some(b));
        assert_eq!(tracker.assets()[1].name(), "Env");
    }

    #[test]
    fn empty_fixed_tracker_reveals_on_demand() {
        let mut tracker = ReadinessTracker::with_expected(0);
        let mut obs = CountingObserver::default();
        assert!(tracker.is_all_ready());
        assert!(tracker.reveal_if_ready(&mut obs));
        assert!(!tracker.reveal_if_ready(&mut obs));
        assert_eq!(obs.reveals, 1);
    }

    #[test]
    fn shared_tracker_serializes_worker_reports() {
        let shared = SharedTracker::default();
        for i in 0..8 {
            let _ = shared.register(&format!("asset{i}")).unwrap();
        }
        let workers: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    let mut obs = CountingObserver::default();
                    let r = shared.mark_loaded(&format!("asset{i}"), &mut obs);
                    (r.unwrap(), obs.reveals)
                })
            })
            .collect();
        let results: Vec<_> =
            workers.into_iter().map(|w| w.join().unwrap()).collect();

        assert!(shared.is_all_ready());
        let became_ready = results
            .iter()
            .filter(|(r, _)| *r == Readiness::BecameReady)
            .count();
        let reveals: u32 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(became_ready, 1);
        assert_eq!(reveals, 1);
    }
}
