use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Gravity direction and strength in engine units (`{x: 0, y: 1}` = down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityVector {
    pub x: f64,
    pub y: f64,
}

impl Default for GravityVector {
    fn default() -> Self {
        Self { x: 0.0, y: 1.0 }
    }
}

/// Container configuration, passed once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GravityConfig {
    pub gravity: GravityVector,
    /// Paint collision outlines and log lifecycle events.
    pub debug: bool,
    /// Rebuild the world when the container is resized.
    pub reset_on_resize: bool,
    /// Switch between grab/grabbing cursors over bodies.
    pub grab_cursor: bool,
    pub add_top_wall: bool,
    /// Start simulating as soon as the world is created.
    pub auto_start: bool,
    /// Quiet period before a resize triggers a rebuild.
    pub resize_debounce_ms: f64,
    /// Mouse spring stiffness, relative to the grabbed body's mass.
    pub mouse_stiffness: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            gravity: GravityVector::default(),
            debug: false,
            reset_on_resize: true,
            grab_cursor: true,
            add_top_wall: true,
            auto_start: true,
            resize_debounce_ms: 500.0,
            mouse_stiffness: 0.2,
        }
    }
}

impl GravityConfig {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| BridgeError::Config(e.to_string()))
    }

    pub fn with_gravity(mut self, x: f64, y: f64) -> Self {
        self.gravity = GravityVector { x, y };
        self
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
