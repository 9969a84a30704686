//! Geometry helpers with no physics or DOM dependency.

pub mod path;
pub mod placement;

pub use path::{sample_path, DEFAULT_SAMPLE_LENGTH};
pub use placement::{resolve_axis, resolve_pose, Pose};
