use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`ChatListConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse chat list config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid chat list config `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A foreground/background colour pair applied to a chat row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
}

impl ColorPair {
    #[must_use]
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }
}

/// The two fixed colour schemes a row can take.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteTable {
    pub default: ColorPair,
    pub highlighted: ColorPair,
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self {
            default: ColorPair::new("#000", "#fff"),
            highlighted: ColorPair::new("#fff", "#333"),
        }
    }
}

/// Which entrance animation rows play when they appear.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    #[default]
    SlideDown,
    Fade,
    #[serde(rename = "none")]
    Still,
}

/// Entrance animation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub kind: MotionKind,
    /// Delay added per row position, in seconds.
    pub stagger_secs: f32,
    pub duration_ms: u32,
    /// Initial vertical offset as a percentage of the row height.
    pub offset_percent: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            kind: MotionKind::SlideDown,
            stagger_secs: 0.1,
            duration_ms: 300,
            offset_percent: 100.0,
        }
    }
}

/// Layout of the stacked avatar cluster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AvatarConfig {
    pub max_visible: usize,
    pub size_rem: f32,
    pub overlap_rem: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            size_rem: 3.0,
            overlap_rem: 1.0,
        }
    }
}

/// Presentation settings for the chat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChatListConfig {
    pub palette: PaletteTable,
    pub motion: MotionConfig,
    pub avatars: AvatarConfig,
}

impl ChatListConfig {
    /// Parses a TOML document; absent sections and fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!(kind = ?config.motion.kind, "chat list config loaded");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("palette.default.foreground", &self.palette.default.foreground),
            ("palette.default.background", &self.palette.default.background),
            (
                "palette.highlighted.foreground",
                &self.palette.highlighted.foreground,
            ),
            (
                "palette.highlighted.background",
                &self.palette.highlighted.background,
            ),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(field, "colour must not be empty"));
            }
        }

        if !non_negative(self.motion.stagger_secs) {
            return Err(invalid("motion.stagger_secs", "must be finite and non-negative"));
        }
        if !non_negative(self.motion.offset_percent) {
            return Err(invalid("motion.offset_percent", "must be finite and non-negative"));
        }
        if self.avatars.max_visible == 0 {
            return Err(invalid("avatars.max_visible", "must be at least 1"));
        }
        if !positive(self.avatars.size_rem) {
            return Err(invalid("avatars.size_rem", "must be finite and positive"));
        }
        if !non_negative(self.avatars.overlap_rem) {
            return Err(invalid("avatars.overlap_rem", "must be finite and non-negative"));
        }
        Ok(())
    }
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
