pub mod config;
pub mod host;
pub mod outline;
pub mod props;
