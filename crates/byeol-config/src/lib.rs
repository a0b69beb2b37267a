//! Configuration file handling for byeol.
//!
//! Settings live in a small TOML file under the platform config directory
//! (e.g. `~/.config/byeol/config.toml` on Linux). A missing file yields the
//! defaults; a malformed file is reported as an error at startup.

use std::fs;
use std::path::PathBuf;

use byeol_core::{ColorTheme, DEFAULT_STAR_COUNT, EffectSpeed};
use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-tunable settings for the effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of concurrent star lineages.
    pub stars: usize,
    /// Overall effect speed.
    pub speed: EffectSpeed,
    /// Color theme.
    pub theme: ColorTheme,
    /// Whether to draw the twinkling backdrop behind the stars.
    pub backdrop: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stars: DEFAULT_STAR_COUNT,
            speed: EffectSpeed::default(),
            theme: ColorTheme::default(),
            backdrop: true,
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory can be determined.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse config at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stars, 5);
        assert_eq!(config.speed, EffectSpeed::Normal);
        assert_eq!(config.theme, ColorTheme::Silver);
        assert!(config.backdrop);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("stars = 8\nspeed = \"fast\"").unwrap();
        assert_eq!(config.stars, 8);
        assert_eq!(config.speed, EffectSpeed::Fast);
        assert_eq!(config.theme, ColorTheme::Silver);
        assert!(config.backdrop);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            stars: 3,
            speed: EffectSpeed::Slow,
            theme: ColorTheme::Ember,
            backdrop: false,
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
