use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::DemoRules;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub demo: DemoRules,
}

/// Carousel timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Transition duration in milliseconds (default: 600). Navigation is
    /// locked for this long after every move.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    /// Auto-advance period in milliseconds (default: 3000).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Start with auto-advance enabled (default: true).
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

/// Event loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 50). Deadlines are serviced
    /// at this granularity.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Capture mouse events for hover and click (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache dir>/folio/folio.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Where the project list comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_animation_ms() -> u64 {
    600
}

fn default_auto_advance_ms() -> u64 {
    3000
}

fn default_autoplay() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    50
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            auto_advance_ms: default_auto_advance_ms(),
            autoplay: default_autoplay(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl CarouselConfig {
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
