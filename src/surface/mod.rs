//! Presentation surface: the page elements a session toggles.
//!
//! A session never touches a document directly. It drives a
//! [`ViewerSurface`], which in a browser is backed by DOM elements and
//! elsewhere by a logger or a recorder.

#[cfg(feature = "web")]
pub mod web;

use crate::hotspot::InfoPayload;

/// The page elements a viewer session controls.
pub trait ViewerSurface {
    /// Show or hide the loading indicator.
    fn set_loading_visible(&mut self, visible: bool);
    /// Replace the loading indicator's text.
    fn set_loading_text(&mut self, text: &str);
    /// Show or hide the 3D viewport.
    fn set_viewport_visible(&mut self, visible: bool);
    /// Fill and show the info panel.
    fn show_info_panel(&mut self, info: &InfoPayload);
    /// Hide the info panel.
    fn hide_info_panel(&mut self);
}

impl<S: ViewerSurface + ?Sized> ViewerSurface for Box<S> {
    fn set_loading_visible(&mut self, visible: bool) {
        (**self).set_loading_visible(visible);
    }

    fn set_loading_text(&mut self, text: &str) {
        (**self).set_loading_text(text);
    }

    fn set_viewport_visible(&mut self, visible: bool) {
        (**self).set_viewport_visible(visible);
    }

    fn show_info_panel(&mut self, info: &InfoPayload) {
        (**self).show_info_panel(info);
    }

    fn hide_info_panel(&mut self) {
        (**self).hide_info_panel();
    }
}

/// Surface that only logs, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl ViewerSurface for LogSurface {
    fn set_loading_visible(&mut self, visible: bool) {
        log::info!("Loading indicator {}", if visible { "shown" } else { "hidden" });
    }

    fn set_loading_text(&mut self, text: &str) {
        log::info!("Loading indicator: {text}");
    }

    fn set_viewport_visible(&mut self, visible: bool) {
        log::info!("Viewport {}", if visible { "shown" } else { "hidden" });
    }

    fn show_info_panel(&mut self, info: &InfoPayload) {
        log::info!("Info panel: {}", info.title);
    }

    fn hide_info_panel(&mut self) {
        log::info!("Info panel closed");
    }
}

/// Surface that keeps the current state of each element, for tests and
/// embedders that render the page themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordingSurface {
    /// Loading indicator visibility.
    pub loading_visible: bool,
    /// Loading indicator text.
    pub loading_text: String,
    /// Viewport visibility.
    pub viewport_visible: bool,
    /// Open info panel content.
    pub info_panel: Option<InfoPayload>,
    /// Times the viewport was switched to visible.
    pub reveals: u32,
}

impl ViewerSurface for RecordingSurface {
    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_loading_text(&mut self, text: &str) {
        text.clone_into(&mut self.loading_text);
    }

    fn set_viewport_visible(&mut self, visible: bool) {
        if visible && !self.viewport_visible {
            self.reveals += 1;
        }
        self.viewport_visible = visible;
    }

    fn show_info_panel(&mut self, info: &InfoPayload) {
        self.info_panel = Some(info.clone());
    }

    fn hide_info_panel(&mut self) {
        self.info_panel = None;
    }
}
