// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Asset readiness tracking, eased camera-view transitions, and hotspot
//! interaction for interactive 3D model viewers.
//!
//! Vista owns the state behind a model-viewer page: it holds the viewport
//! hidden until every asset has loaded, flies the camera between named
//! views along eased paths, and turns pointer input over 3D markers into
//! info-panel and camera actions. Rendering is left to the host.
//!
//! # Key entry points
//!
//! - [`session::ViewerSession`] - the single owner of all viewer state
//! - [`assets::ReadinessTracker`] - fan-in barrier over named asset loads
//! - [`camera::ViewTransitionController`] - eased, supersedable camera moves
//! - [`hotspot::HotspotInteraction`] - marker hover and info-panel state
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame order
//!
//! Each frame, [`session::ViewerSession::tick`] updates the orbit controls
//! first and the active transition second, so a transition's pose wins
//! whenever both write the camera in the same frame.

pub mod assets;
pub mod camera;
pub mod error;
pub mod hotspot;
pub mod input;
pub mod options;
pub mod session;
pub mod surface;
pub mod util;

pub use error::VistaError;
pub use options::Options;
pub use session::{ViewerCommand, ViewerSession};
