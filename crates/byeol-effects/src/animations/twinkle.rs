//! Twinkling star backdrop (stateless).

use byeol_core::{ColorTheme, EffectSpeed};
use ratatui::{style::Style, text::Span};

use crate::chars::BACKDROP_CHARS;
use crate::color::backdrop_color;

/// Render the backdrop twinkle at a cell, if one lands there.
///
/// Roughly 2% of cells hold a faint star on any given frame; which cells
/// shift every twinkle period, hashed from position, frame number, and the
/// effect's init seed.
pub fn render_char(
    x: u16,
    y: u16,
    elapsed_ms: u64,
    init_seed: u64,
    speed: EffectSpeed,
    theme: ColorTheme,
) -> Option<Span<'static>> {
    let period = speed.twinkle_period_ms().max(1);
    let frame_num = (elapsed_ms / period) as usize;

    let seed = (x as usize)
        .wrapping_mul(31)
        .wrapping_add((y as usize).wrapping_mul(17))
        .wrapping_add(frame_num)
        .wrapping_add(init_seed as usize);

    if seed % 100 < 2 {
        let ch = BACKDROP_CHARS[seed % BACKDROP_CHARS.len()];
        let tier = (seed % 3) as u8;
        let color = backdrop_color(theme.hue(), tier);
        Some(Span::styled(ch.to_string(), Style::new().fg(color)))
    } else {
        None
    }
}
