//! Error types.
//!
//! Navigation never fails: empty carousels and out-of-range targets are
//! handled by policy. Errors only surface at configuration boundaries.

use thiserror::Error;

/// Unified result type for spark-carousel.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a [`CarouselConfig`](crate::config::CarouselConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("autoplay delay must be greater than zero")]
    ZeroDelay,
    #[error("invalid autoplay delay `{value}`: expected milliseconds")]
    InvalidDelay { value: String },
}
