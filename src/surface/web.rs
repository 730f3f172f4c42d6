//! DOM-backed surface for browser builds.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::ViewerSurface;
use crate::error::VistaError;
use crate::hotspot::InfoPayload;

/// Element ids the DOM surface binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    /// Loading indicator.
    pub loading: String,
    /// Viewport container (usually the canvas).
    pub viewport: String,
    /// Info panel container.
    pub panel: String,
    /// Info panel heading.
    pub panel_title: String,
    /// Info panel text.
    pub panel_body: String,
    /// Optional info panel image.
    pub panel_image: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            loading: "loading".into(),
            viewport: "container".into(),
            panel: "info-panel".into(),
            panel_title: "info-title".into(),
            panel_body: "info-body".into(),
            panel_image: "info-image".into(),
        }
    }
}

/// Route `log` output to the browser console and install the panic hook.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
}

/// [`ViewerSurface`] backed by page elements.
#[derive(Debug, Clone)]
pub struct DomSurface {
    loading: HtmlElement,
    viewport: HtmlElement,
    panel: HtmlElement,
    panel_title: Element,
    panel_body: Element,
    panel_image: Option<HtmlImageElement>,
}

fn html_element(doc: &Document, id: &str) -> Result<HtmlElement, VistaError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| VistaError::Surface(format!("missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| VistaError::Surface(format!("#{id} is not an HTML element")))
}

fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    if element.style().set_property("display", value).is_err() {
        log::warn!("Failed to set display on #{}", element.id());
    }
}

impl DomSurface {
    /// Bind to the elements named by `ids`. The image element is optional.
    pub fn from_document(doc: &Document, ids: &DomIds) -> Result<Self, VistaError> {
        let text_element = |id: &str| {
            doc.get_element_by_id(id)
                .ok_or_else(|| VistaError::Surface(format!("missing element #{id}")))
        };
        Ok(Self {
            loading: html_element(doc, &ids.loading)?,
            viewport: html_element(doc, &ids.viewport)?,
            panel: html_element(doc, &ids.panel)?,
            panel_title: text_element(&ids.panel_title)?,
            panel_body: text_element(&ids.panel_body)?,
            panel_image: doc
                .get_element_by_id(&ids.panel_image)
                .and_then(|e| e.dyn_into::<HtmlImageElement>().ok()),
        })
    }

    /// Bind to the current window's document with default ids.
    pub fn from_window() -> Result<Self, VistaError> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| VistaError::Surface("no document".into()))?;
        Self::from_document(&doc, &DomIds::default())
    }
}

impl ViewerSurface for DomSurface {
    fn set_loading_visible(&mut self, visible: bool) {
        set_display(&self.loading, visible);
    }

    fn set_loading_text(&mut self, text: &str) {
        self.loading.set_text_content(Some(text));
    }

    fn set_viewport_visible(&mut self, visible: bool) {
        set_display(&self.viewport, visible);
    }

    fn show_info_panel(&mut self, info: &InfoPayload) {
        self.panel_title.set_text_content(Some(&info.title));
        self.panel_body.set_text_content(Some(&info.body));
        if let Some(img) = &self.panel_image {
            match &info.image {
                Some(src) => {
                    img.set_src(src);
                    set_display(img, true);
                }
                None => set_display(img, false),
            }
        }
        set_display(&self.panel, true);
    }

    fn hide_info_panel(&mut self) {
        set_display(&self.panel, false);
    }
}
