//! Core types shared across the byeol crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Default number of concurrent star lineages.
pub const DEFAULT_STAR_COUNT: usize = 5;

/// Upper bound (exclusive) for the initial per-lineage spawn delay, in
/// milliseconds. Delays are sampled uniformly from `[0, this)` so the
/// lineages do not all appear at once.
pub const INITIAL_DELAY_MAX_MS: u64 = 5000;

/// Color theme for the star effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Silver,
    Gold,
    Ice,
    Violet,
    Ember,
}

impl ColorTheme {
    /// Accent color used for UI text (help line, status).
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Silver => Color::Rgb(200, 205, 220),
            ColorTheme::Gold => Color::Rgb(230, 195, 100),
            ColorTheme::Ice => Color::Rgb(140, 200, 240),
            ColorTheme::Violet => Color::Rgb(190, 150, 240),
            ColorTheme::Ember => Color::Rgb(240, 140, 90),
        }
    }

    /// Base hue (degrees) that star trails fade toward.
    pub fn hue(self) -> f32 {
        match self {
            ColorTheme::Silver => 225.0,
            ColorTheme::Gold => 45.0,
            ColorTheme::Ice => 200.0,
            ColorTheme::Violet => 270.0,
            ColorTheme::Ember => 20.0,
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Silver => ColorTheme::Gold,
            ColorTheme::Gold => ColorTheme::Ice,
            ColorTheme::Ice => ColorTheme::Violet,
            ColorTheme::Violet => ColorTheme::Ember,
            ColorTheme::Ember => ColorTheme::Silver,
        }
    }
}

/// Overall speed of the effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl EffectSpeed {
    /// Nominal length of one shooting-star cycle in milliseconds.
    /// Individual stars jitter around this value.
    pub fn cycle_duration_ms(self) -> u64 {
        match self {
            EffectSpeed::Slow => 1600,
            EffectSpeed::Normal => 1200,
            EffectSpeed::Fast => 800,
        }
    }

    /// Distance a star head travels per millisecond, in cells.
    pub fn streak_cells_per_ms(self) -> f32 {
        match self {
            EffectSpeed::Slow => 0.012,
            EffectSpeed::Normal => 0.018,
            EffectSpeed::Fast => 0.028,
        }
    }

    /// Period of one backdrop twinkle frame in milliseconds.
    pub fn twinkle_period_ms(self) -> u64 {
        match self {
            EffectSpeed::Slow => 1100,
            EffectSpeed::Normal => 800,
            EffectSpeed::Fast => 500,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            EffectSpeed::Slow => EffectSpeed::Normal,
            EffectSpeed::Normal => EffectSpeed::Fast,
            EffectSpeed::Fast => EffectSpeed::Slow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::Silver;
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Silver);
    }

    #[test]
    fn test_speed_tuning_is_monotonic() {
        assert!(
            EffectSpeed::Slow.cycle_duration_ms() > EffectSpeed::Normal.cycle_duration_ms()
        );
        assert!(
            EffectSpeed::Normal.cycle_duration_ms() > EffectSpeed::Fast.cycle_duration_ms()
        );
        assert!(
            EffectSpeed::Slow.streak_cells_per_ms() < EffectSpeed::Fast.streak_cells_per_ms()
        );
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_STAR_COUNT, 5);
        assert_eq!(INITIAL_DELAY_MAX_MS, 5000);
    }
}
