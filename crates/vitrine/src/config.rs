//! Page tuning file.
//!
//! Every key is optional; omitted values keep the stock behavior. Unknown
//! keys are rejected so typos do not silently fall back to defaults.
//!
//! ```toml
//! [scroll]
//! header_offset = 64.0
//!
//! [hero]
//! interval_ms = 7000
//!
//! [marquee]
//! strips = [".logo-track"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vitrine_ui::{CounterConfig, HeroConfig, MarqueeConfig, ScrollConfig, TestimonialsConfig};

use crate::error::ConfigError;

/// Tuning for every feature on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Anchor scrolling.
    pub scroll: ScrollConfig,
    /// Hero slider timing.
    pub hero: HeroConfig,
    /// Testimonials timing and card spacing.
    pub testimonials: TestimonialsConfig,
    /// Stat counter ramp.
    pub counter: CounterConfig,
    /// Strips doubled for the marquee effect.
    pub marquee: MarqueeConfig,
}

impl PageConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` on out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a tuning file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`PageConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "page config loaded");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.scroll.frame_ms == 0, "scroll.frame_ms", "must be positive"),
            (!self.scroll.header_offset.is_finite(), "scroll.header_offset", "must be finite"),
            (self.hero.interval_ms == 0, "hero.interval_ms", "must be positive"),
            (self.testimonials.interval_ms == 0, "testimonials.interval_ms", "must be positive"),
            (
                !self.testimonials.card_margin.is_finite() || self.testimonials.card_margin < 0.0,
                "testimonials.card_margin",
                "must be a non-negative number",
            ),
            (self.counter.step_ms == 0, "counter.step_ms", "must be positive"),
            (
                self.counter.step_ms > self.counter.duration_ms,
                "counter.step_ms",
                "must not exceed counter.duration_ms",
            ),
            (
                !(self.counter.visibility_threshold > 0.0 && self.counter.visibility_threshold <= 1.0),
                "counter.visibility_threshold",
                "must be in (0, 1]",
            ),
        ];

        match checks.into_iter().find(|(failed, _, _)| *failed) {
            Some((_, field, reason)) => Err(ConfigError::Invalid { field, reason }),
            None => Ok(()),
        }
    }
}
