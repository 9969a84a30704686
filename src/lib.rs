//! Gravity Bridge - DOM-to-physics synchronization in WASM
//!
//! Declarative page elements register themselves with a container; each
//! one gets a rapier2d rigid body, and every animation frame the simulated
//! pose is written back onto the element as a CSS transform.
//!
//! Architecture:
//! - utils/       - Logging macro and timestamps
//! - domain/      - Props, config, host traits, outlines
//! - geometry/    - Path sampling and placement math
//! - systems/     - Physics world, body factory, renderer lifecycle
//! - simulation/  - World manager, registry, sync loop
//! - api/         - Browser binding (wasm-bindgen + web-sys)

// Logging macros are used by every module below (must be first!)
#[macro_use]
pub mod utils;
pub mod error;
pub mod domain;
pub mod geometry;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

pub use error::BridgeError;
pub use domain::config::GravityConfig;
pub use domain::host::{BodyElement, Container, Cursor, RenderSurface, Size};
pub use domain::props::{BodyProps, ChamferOverride, Coordinate, Material, MaterialOverrides, ShapeKind};
pub use simulation::{GravityCore, WorldState};

// Re-export the browser entry point
pub use api::wasm::Gravity;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the bridge module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    bridge_log!("gravity bridge v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get bridge version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
