use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, Node};

use crate::domain::host::{BodyElement, Container, Cursor, Size};

use super::canvas::CanvasSurface;

/// A registered page element.
#[derive(Clone, Debug)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn new(node: HtmlElement) -> Self {
        Self(node)
    }

    pub fn node(&self) -> &HtmlElement {
        &self.0
    }
}

impl BodyElement for DomElement {
    fn offset_size(&self) -> Size {
        Size::new(self.0.offset_width() as f64, self.0.offset_height() as f64)
    }

    fn path_data(&self) -> Vec<String> {
        let Ok(paths) = self.0.query_selector_all("path") else {
            return Vec::new();
        };
        (0..paths.length())
            .filter_map(|i| paths.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|path| path.get_attribute("d"))
            .collect()
    }

    fn set_transform(&self, transform: &str) {
        if let Err(err) = self.0.style().set_property("transform", transform) {
            bridge_log!("gravity: could not write transform: {:?}", err);
        }
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &Node = &other.0;
        self.0.is_same_node(Some(other))
    }
}

/// The element hosting a simulation.
#[derive(Clone, Debug)]
pub struct DomContainer(HtmlElement);

impl DomContainer {
    pub fn new(node: HtmlElement) -> Self {
        Self(node)
    }

    pub fn node(&self) -> &HtmlElement {
        &self.0
    }

    /// Pointer position relative to the container's top-left corner.
    pub fn local_point(&self, event: &MouseEvent) -> (f64, f64) {
        let rect = self.0.get_bounding_client_rect();
        (
            event.client_x() as f64 - rect.left(),
            event.client_y() as f64 - rect.top(),
        )
    }
}

impl Container for DomContainer {
    type Surface = CanvasSurface;

    fn bounding_size(&self) -> Option<Size> {
        if !self.0.is_connected() {
            return None;
        }
        let rect = self.0.get_bounding_client_rect();
        Some(Size::new(rect.width(), rect.height()))
    }

    fn set_cursor(&self, cursor: Cursor) {
        if let Err(err) = self.0.style().set_property("cursor", cursor.css()) {
            bridge_log!("gravity: could not set cursor: {:?}", err);
        }
    }

    fn attach_surface(&self, size: Size) -> Option<CanvasSurface> {
        match CanvasSurface::attach(&self.0, size) {
            Ok(surface) => Some(surface),
            Err(err) => {
                bridge_log!("gravity: debug canvas unavailable: {:?}", err);
                None
            }
        }
    }
}
