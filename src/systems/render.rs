//! Debug renderer lifecycle
//!
//! Always present while a world exists so start/stop have something to
//! drive; only paints when a surface was attached (debug mode).

use crate::domain::host::RenderSurface;
use crate::domain::outline::PlacedOutline;

pub struct Renderer<S: RenderSurface> {
    surface: Option<S>,
    running: bool,
    frames_drawn: u64,
}

impl<S: RenderSurface> Renderer<S> {
    pub fn new(surface: Option<S>) -> Self {
        Self { surface, running: false, frames_drawn: 0 }
    }

    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Paint one frame. No-op while paused or without a surface.
    pub fn draw(&mut self, outlines: &[PlacedOutline<'_>]) {
        if !self.running {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.draw(outlines);
            self.frames_drawn += 1;
        }
    }

    /// Stop and remove the surface from the page.
    pub fn discard(&mut self) {
        self.running = false;
        if let Some(mut surface) = self.surface.take() {
            surface.detach();
        }
    }
}

impl<S: RenderSurface> Drop for Renderer<S> {
    fn drop(&mut self) {
        self.discard();
    }
}
