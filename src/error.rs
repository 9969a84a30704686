//! Error types for the bridge.

use thiserror::Error;

/// Errors surfaced by registration, hydration and config parsing.
///
/// A container that is not laid out yet is not an error; initialization
/// skips it and waits for the next attempt.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Malformed path data, passed through untouched from the geometry crate.
    #[error(transparent)]
    Path(#[from] kurbo::SvgParseError),

    /// Container configuration did not parse.
    #[error("invalid gravity config: {0}")]
    Config(String),

    /// Body props did not parse.
    #[error("invalid body props: {0}")]
    Props(String),

    /// A position value that is neither a number nor a percentage.
    #[error("invalid coordinate `{0}`: expected a number or a percentage like \"50%\"")]
    Coordinate(String),
}
