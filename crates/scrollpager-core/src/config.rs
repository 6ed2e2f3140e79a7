use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Paging engine tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Snap points closer than this to the current offset are not considered "ahead"
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f64,
    /// Fraction of the viewport moved per activation when snapping is off
    #[serde(default = "default_fallback_fraction")]
    pub fallback_fraction: f64,
    /// Clamp snap candidates into the reachable scroll range
    #[serde(default = "default_true")]
    pub clamp_candidates: bool,
    /// Request smooth scrolling (false = instant jumps)
    #[serde(default = "default_true")]
    pub smooth: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            snap_epsilon: default_snap_epsilon(),
            fallback_fraction: default_fallback_fraction(),
            clamp_candidates: default_true(),
            smooth: default_true(),
        }
    }
}

impl PagingConfig {
    /// Epsilon with negative or non-finite values replaced by zero
    pub fn epsilon(&self) -> f64 {
        if self.snap_epsilon.is_finite() && self.snap_epsilon > 0.0 {
            self.snap_epsilon
        } else {
            0.0
        }
    }

    /// Fallback fraction, reset to the default when out of (0, 1]
    pub fn fraction(&self) -> f64 {
        if self.fallback_fraction.is_finite()
            && self.fallback_fraction > 0.0
            && self.fallback_fraction <= 1.0
        {
            self.fallback_fraction
        } else {
            tracing::warn!(
                "fallback_fraction {} out of range, using {}",
                self.fallback_fraction,
                default_fallback_fraction()
            );
            default_fallback_fraction()
        }
    }
}

/// Easing curve used by the smooth scroll animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Smooth scrolling animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_snap_epsilon() -> f64 {
    1.0
}

fn default_fallback_fraction() -> f64 {
    0.85 // leaves some overlap between consecutive pages
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollpager/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollpager")
            .join("config.toml")
    }
}
