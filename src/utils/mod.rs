//! Small cross-target helpers shared by every module.

#[macro_use]
pub mod log;
pub mod clock;
