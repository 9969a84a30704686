//! Host seams
//!
//! The bridge never touches the DOM directly. Elements and the container
//! are reached through these traits: `api::dom` implements them on
//! web-sys types, tests implement them on plain structs.

use super::outline::PlacedOutline;

/// Width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or NaN (not laid out yet).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A page element paired with a rigid body.
pub trait BodyElement {
    /// Laid-out size (`offsetWidth`/`offsetHeight`); authoritative for shapes.
    fn offset_size(&self) -> Size;

    /// `d` attribute of every vector path inside the element, in document order.
    fn path_data(&self) -> Vec<String>;

    /// Overwrite the element's CSS transform.
    fn set_transform(&self, transform: &str);

    /// Identity check: same underlying node, not structural equality.
    fn is_same(&self, other: &Self) -> bool;
}

/// Pointer affordance shown over the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Where debug outlines get painted.
pub trait RenderSurface {
    fn draw(&mut self, outlines: &[PlacedOutline<'_>]);

    /// Remove the surface from the page. Called once, on teardown.
    fn detach(&mut self);
}

/// The element hosting the simulation.
pub trait Container {
    type Surface: RenderSurface;

    /// Current bounding box size, or `None` while the node is not mounted.
    fn bounding_size(&self) -> Option<Size>;

    fn set_cursor(&self, cursor: Cursor);

    /// Create a drawing surface bound to the container.
    fn attach_surface(&self, size: Size) -> Option<Self::Surface>;
}
