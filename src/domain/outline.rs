//! Debug outlines
//!
//! Bodies are physics-only; the element is what the user sees. Outlines
//! exist so the debug renderer can paint collision shapes on top.

/// RGBA colour, alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub line_width: f64,
}

impl RenderStyle {
    /// Normal operation: nothing is drawn for the body.
    pub const INVISIBLE: RenderStyle = RenderStyle {
        fill: Rgba::TRANSPARENT,
        stroke: Rgba::TRANSPARENT,
        line_width: 0.0,
    };

    pub const DEBUG: RenderStyle = RenderStyle {
        fill: Rgba::new(98, 180, 255, 0.25),
        stroke: Rgba::new(98, 180, 255, 1.0),
        line_width: 1.0,
    };

    pub const DEBUG_WALL: RenderStyle = RenderStyle {
        fill: Rgba::new(160, 160, 160, 0.35),
        stroke: Rgba::new(160, 160, 160, 1.0),
        line_width: 1.0,
    };

    pub fn for_debug(debug: bool) -> Self {
        if debug {
            Self::DEBUG
        } else {
            Self::INVISIBLE
        }
    }

    pub fn is_visible(&self) -> bool {
        !(self.fill.is_transparent() && self.stroke.is_transparent())
    }
}

/// Shape in body-local coordinates (origin at the body centre).
#[derive(Clone, Debug, PartialEq)]
pub enum OutlineShape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
    Polygons(Vec<Vec<(f64, f64)>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodyOutline {
    pub shape: OutlineShape,
    pub style: RenderStyle,
}

/// An outline positioned for one frame.
#[derive(Clone, Copy, Debug)]
pub struct PlacedOutline<'a> {
    pub outline: &'a BodyOutline,
    pub x: f64,
    pub y: f64,
    /// Radians.
    pub angle: f64,
}
