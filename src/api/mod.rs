//! Browser binding
//!
//! - dom     - `BodyElement`/`Container` over web-sys nodes
//! - canvas  - debug overlay surface
//! - wasm    - the `Gravity` handle exported to JavaScript

pub mod canvas;
pub mod dom;
pub mod wasm;

pub use canvas::CanvasSurface;
pub use dom::{DomContainer, DomElement};
pub use wasm::Gravity;
