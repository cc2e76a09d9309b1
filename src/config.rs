//! Carousel configuration.
//!
//! Defaults match the page behavior: autoplay every 15 seconds, started as
//! soon as a carousel is discovered.

use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default delay between autoplay transitions.
pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(15_000);

/// Environment variable overriding the autoplay delay, in milliseconds.
pub const AUTOPLAY_DELAY_ENV: &str = "SPARK_CAROUSEL_AUTOPLAY_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Interval between automatic `next()` calls.
    pub autoplay_delay: Duration,
    /// Start autoplay on every instance right after discovery.
    pub autoplay_on_mount: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            autoplay_on_mount: true,
        }
    }
}

impl CarouselConfig {
    /// Build from the environment, falling back to defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Apply environment overrides on top of `self`.
    pub fn with_env(self) -> Result<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    /// Unset variables leave `self` untouched.
    pub fn with_lookup<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(AUTOPLAY_DELAY_ENV) {
            Some(raw) => self.with_autoplay_ms(&raw),
            None => Ok(self),
        }
    }

    /// Set the autoplay delay. Zero is rejected.
    pub fn with_autoplay_delay(mut self, delay: Duration) -> Result<Self> {
        if delay.is_zero() {
            return Err(ConfigError::ZeroDelay);
        }
        self.autoplay_delay = delay;
        Ok(self)
    }

    /// Parse a millisecond string (as found in the environment).
    pub fn with_autoplay_ms(self, raw: &str) -> Result<Self> {
        let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidDelay {
            value: raw.to_string(),
        })?;
        self.with_autoplay_delay(Duration::from_millis(ms))
    }

    pub fn with_autoplay_on_mount(mut self, enabled: bool) -> Self {
        self.autoplay_on_mount = enabled;
        self
    }
}
