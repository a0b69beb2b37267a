//! Effect state management.

use byeol_core::{ColorTheme, EffectSpeed};
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::animations::{shooting, twinkle};
use crate::rng::XorShift64;

/// Shooting-star effect state.
///
/// Owns the star lineages and the RNG. All scheduling happens inside
/// [`EffectState::update`], driven by the caller's loop; dropping the state
/// tears the whole effect down.
#[derive(Debug)]
pub struct EffectState {
    /// Star lineage states.
    lineages: Vec<shooting::StarLineage>,
    /// RNG for spawn positions, delays, and flight parameters.
    rng: XorShift64,
    /// Number of lineages to run.
    star_count: usize,
    /// Last known viewport width.
    last_width: u16,
    /// Last known viewport height.
    last_height: u16,
    /// Last update time in milliseconds.
    last_update_ms: u64,
    /// Elapsed time at which the lineages were (re)initialized.
    epoch_ms: u64,
    /// Seed captured at initialization, also used by the backdrop hash.
    init_seed: u64,
}

impl EffectState {
    /// Create a new effect state seeded from the system clock.
    pub fn new(star_count: usize) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(star_count, init_seed)
    }

    /// Create a new effect state with a fixed seed.
    pub fn with_seed(star_count: usize, seed: u64) -> Self {
        Self {
            lineages: Vec::new(),
            rng: XorShift64::new(seed),
            star_count,
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
            epoch_ms: 0,
            init_seed: seed,
        }
    }

    /// Advance the effect to `elapsed_ms` for a viewport of the given size.
    ///
    /// A dimension change re-initializes the lineages with fresh staggered
    /// delays, counted from the moment of the resize. A zero-sized viewport
    /// is a no-op for spawning.
    pub fn update(&mut self, elapsed_ms: u64, width: u16, height: u16, speed: EffectSpeed) {
        let dimensions_changed = width != self.last_width || height != self.last_height;

        if dimensions_changed || (self.lineages.is_empty() && self.star_count > 0) {
            self.lineages = shooting::init_lineages(self.star_count, &mut self.rng);
            self.epoch_ms = elapsed_ms;
            self.last_width = width;
            self.last_height = height;
        }

        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        shooting::update(
            &mut self.lineages,
            &mut self.rng,
            delta_ms,
            elapsed_ms.saturating_sub(self.epoch_ms),
            width,
            height,
            speed,
        );
    }

    /// Update and render the effect across the whole frame.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        elapsed_ms: u64,
        speed: EffectSpeed,
        theme: ColorTheme,
        backdrop: bool,
    ) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.update(elapsed_ms, area.width, area.height, speed);
        let effect_elapsed = elapsed_ms.saturating_sub(self.epoch_ms);

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| self.render_cell(x, y, effect_elapsed, speed, theme, backdrop))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render a single cell: shooting stars over the optional backdrop.
    fn render_cell(
        &self,
        x: u16,
        y: u16,
        effect_elapsed: u64,
        speed: EffectSpeed,
        theme: ColorTheme,
        backdrop: bool,
    ) -> Span<'static> {
        if let Some(span) = shooting::render_char(&self.lineages, x, y, theme) {
            return span;
        }
        if backdrop {
            if let Some(span) =
                twinkle::render_char(x, y, effect_elapsed, self.init_seed, speed, theme)
            {
                return span;
            }
        }
        Span::raw(" ")
    }
}
