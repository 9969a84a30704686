//! Debug overlay
//!
//! A `<canvas>` stacked over the container. Pointer events pass through it
//! so dragging still reaches the container.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::domain::host::{RenderSurface, Size};
use crate::domain::outline::{OutlineShape, PlacedOutline};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: Size,
}

impl CanvasSurface {
    pub fn attach(parent: &HtmlElement, size: Size) -> Result<Self, JsValue> {
        let document = parent
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is not in a document"))?;
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let (width, height) = backing_size(size, ratio);
        canvas.set_width(width);
        canvas.set_height(height);

        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", &format!("{}px", size.width))?;
        style.set_property("height", &format!("{}px", size.height))?;
        style.set_property("pointer-events", "none")?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        // Draw in CSS pixels on a device-pixel backing store.
        ctx.scale(pixel_ratio(ratio), pixel_ratio(ratio))?;

        parent.append_child(&canvas)?;
        Ok(Self { canvas, ctx, size })
    }

    fn paint(&self, placed: &PlacedOutline<'_>) -> Result<(), JsValue> {
        let style = placed.outline.style;
        if !style.is_visible() {
            return Ok(());
        }

        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(placed.x, placed.y)?;
        ctx.rotate(placed.angle)?;
        ctx.begin_path();
        match &placed.outline.shape {
            OutlineShape::Rect { width, height } => {
                ctx.rect(-width / 2.0, -height / 2.0, *width, *height);
            }
            OutlineShape::Circle { radius } => {
                ctx.arc(0.0, 0.0, *radius, 0.0, TAU)?;
            }
            OutlineShape::Polygons(polygons) => {
                for polygon in polygons {
                    let mut points = polygon.iter();
                    if let Some(&(x, y)) = points.next() {
                        ctx.move_to(x, y);
                        for &(x, y) in points {
                            ctx.line_to(x, y);
                        }
                        ctx.close_path();
                    }
                }
            }
        }
        ctx.set_fill_style_str(&style.fill.css());
        ctx.fill();
        ctx.set_stroke_style_str(&style.stroke.css());
        ctx.set_line_width(style.line_width);
        ctx.stroke();
        ctx.restore();
        Ok(())
    }
}

fn pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Canvas buffer size for a CSS size on a screen with `ratio` device pixels
/// per CSS pixel.
fn backing_size(size: Size, ratio: f64) -> (u32, u32) {
    let ratio = pixel_ratio(ratio);
    (
        (size.width * ratio).ceil() as u32,
        (size.height * ratio).ceil() as u32,
    )
}

impl RenderSurface for CanvasSurface {
    fn draw(&mut self, outlines: &[PlacedOutline<'_>]) {
        self.ctx.clear_rect(0.0, 0.0, self.size.width, self.size.height);
        for placed in outlines {
            if let Err(err) = self.paint(placed) {
                bridge_log!("gravity: debug draw failed: {:?}", err);
                // Leave the context balanced for the next outline.
                self.ctx.restore();
            }
        }
    }

    fn detach(&mut self) {
        self.canvas.remove();
    }
}
