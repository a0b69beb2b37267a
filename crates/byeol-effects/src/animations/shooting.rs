//! Shooting-star lineages (stateful).

use byeol_core::{ColorTheme, EffectSpeed, INITIAL_DELAY_MAX_MS};
use ratatui::{style::Style, text::Span};

use crate::chars::{HEAD_CHARS, TRAIL_CHARS};
use crate::color::{HEAD_COLOR, trail_color};
use crate::rng::XorShift64;

/// A single transient star: spawned at a random origin, streaks for one
/// cycle, then replaced.
#[derive(Debug, Clone)]
pub struct ShootingStar {
    /// Spawn origin, within the viewport at spawn time.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Unit flight direction, a shallow diagonal left or right.
    pub dir_x: f32,
    pub dir_y: f32,
    /// Per-star speed multiplier.
    pub pace: f32,
    /// Milliseconds since spawn.
    pub age_ms: u64,
    /// Cells traveled since spawn.
    pub dist_cells: f32,
    /// Length of this star's cycle in milliseconds.
    pub cycle_ms: u64,
    /// Trail length in cells.
    pub trail_len: usize,
    /// Seed for character selection.
    pub char_seed: usize,
}

/// One perpetual spawn/respawn sequence. At most one star is ever active
/// per lineage.
#[derive(Debug, Clone)]
pub struct StarLineage {
    /// Initial stagger before the first spawn, in milliseconds.
    pub delay_ms: u64,
    /// Active star. None until the initial delay elapses.
    pub star: Option<ShootingStar>,
    /// Completed animation cycles.
    pub cycles: u64,
}

/// Initialize `count` lineages, each with an initial delay sampled
/// uniformly from `[0, INITIAL_DELAY_MAX_MS)`.
pub fn init_lineages(count: usize, rng: &mut XorShift64) -> Vec<StarLineage> {
    (0..count)
        .map(|_| StarLineage {
            delay_ms: rng.next_below(INITIAL_DELAY_MAX_MS),
            star: None,
            cycles: 0,
        })
        .collect()
}

fn spawn_star(rng: &mut XorShift64, width: u16, height: u16, speed: EffectSpeed) -> ShootingStar {
    let origin_x = rng.next_f32() * width as f32;
    let origin_y = rng.next_f32() * height as f32;

    // Shallow dive, left or right at random. Terminal cells are taller
    // than wide, so the flat angle still reads as ~45 degrees.
    let angle = rng.range_f32(0.25, 0.55);
    let lateral = if rng.next_f32() < 0.5 { -1.0 } else { 1.0 };

    let jitter = rng.range_f32(0.85, 1.15);

    ShootingStar {
        origin_x,
        origin_y,
        dir_x: lateral * angle.cos(),
        dir_y: angle.sin(),
        pace: rng.range_f32(0.85, 1.25),
        age_ms: 0,
        dist_cells: 0.0,
        cycle_ms: (speed.cycle_duration_ms() as f32 * jitter) as u64,
        trail_len: 4 + rng.next_below(5) as usize,
        char_seed: rng.next_u64() as usize,
    }
}

/// Advance every lineage by `delta_ms`.
///
/// Pending lineages whose initial delay has elapsed spawn their first star;
/// a star whose cycle completed is removed and immediately replaced by a
/// fresh one at a new random origin. Respawning is an explicit step of this
/// update, so the caller's loop is the only scheduler and dropping the
/// state stops everything. An empty viewport spawns nothing.
pub fn update(
    lineages: &mut [StarLineage],
    rng: &mut XorShift64,
    delta_ms: u64,
    elapsed_ms: u64,
    width: u16,
    height: u16,
    speed: EffectSpeed,
) {
    if width == 0 || height == 0 {
        return;
    }

    let cells_per_ms = speed.streak_cells_per_ms();

    for lineage in lineages {
        let respawn = match &mut lineage.star {
            None => elapsed_ms >= lineage.delay_ms,
            Some(star) => {
                star.age_ms += delta_ms;
                star.dist_cells += delta_ms as f32 * cells_per_ms * star.pace;
                star.age_ms >= star.cycle_ms
            }
        };

        if respawn {
            if lineage.star.is_some() {
                lineage.cycles += 1;
            }
            lineage.star = Some(spawn_star(rng, width, height, speed));
        }
    }
}

/// Render the shooting-star cell at `(x, y)`, if any star's head or trail
/// covers it.
pub fn render_char(
    lineages: &[StarLineage],
    x: u16,
    y: u16,
    theme: ColorTheme,
) -> Option<Span<'static>> {
    let x = x as i32;
    let y = y as i32;

    for lineage in lineages {
        let Some(star) = &lineage.star else {
            continue;
        };

        let head_x = star.origin_x + star.dir_x * star.dist_cells;
        let head_y = star.origin_y + star.dir_y * star.dist_cells;

        // Walk back along the flight path one cell per step.
        for i in 0..=star.trail_len {
            let px = (head_x - star.dir_x * i as f32).round() as i32;
            let py = (head_y - star.dir_y * i as f32).round() as i32;
            if px != x || py != y {
                continue;
            }

            if i == 0 {
                let ch = HEAD_CHARS[star.char_seed % HEAD_CHARS.len()];
                return Some(Span::styled(ch.to_string(), Style::new().fg(HEAD_COLOR)));
            }

            let intensity = 1.0 - i as f32 / (star.trail_len + 1) as f32;
            let char_idx = ((1.0 - intensity) * TRAIL_CHARS.len() as f32) as usize;
            let ch = TRAIL_CHARS[char_idx.min(TRAIL_CHARS.len() - 1)];
            let color = trail_color(theme.hue(), intensity);
            return Some(Span::styled(ch.to_string(), Style::new().fg(color)));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 24;
    const STEP_MS: u64 = 40;

    fn rng() -> XorShift64 {
        XorShift64::new(0xB1E0)
    }

    fn run_effect(lineages: &mut [StarLineage], rng: &mut XorShift64, total_ms: u64) {
        let mut elapsed = 0;
        while elapsed < total_ms {
            elapsed += STEP_MS;
            update(
                lineages,
                rng,
                STEP_MS,
                elapsed,
                WIDTH,
                HEIGHT,
                EffectSpeed::Normal,
            );
        }
    }

    #[test]
    fn test_init_lineages_count_and_delays() {
        let mut rng = rng();
        let lineages = init_lineages(5, &mut rng);
        assert_eq!(lineages.len(), 5);
        for lineage in &lineages {
            assert!(lineage.delay_ms < INITIAL_DELAY_MAX_MS);
            assert!(lineage.star.is_none());
            assert_eq!(lineage.cycles, 0);
        }
    }

    #[test]
    fn test_spawn_origins_stay_in_bounds() {
        let mut rng = rng();
        let mut lineages = init_lineages(5, &mut rng);
        let mut elapsed = 0;
        while elapsed < 120_000 {
            elapsed += STEP_MS;
            update(
                &mut lineages,
                &mut rng,
                STEP_MS,
                elapsed,
                WIDTH,
                HEIGHT,
                EffectSpeed::Normal,
            );
            for lineage in &lineages {
                if let Some(star) = &lineage.star {
                    assert!((0.0..WIDTH as f32).contains(&star.origin_x));
                    assert!((0.0..HEIGHT as f32).contains(&star.origin_y));
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_star_per_lineage_after_many_cycles() {
        let mut rng = rng();
        let mut lineages = init_lineages(5, &mut rng);
        run_effect(&mut lineages, &mut rng, 120_000);

        assert_eq!(lineages.len(), 5);
        for lineage in &lineages {
            assert!(lineage.star.is_some());
            assert!(lineage.cycles >= 10, "only {} cycles", lineage.cycles);
        }
    }

    #[test]
    fn test_all_lineages_spawn_once_delay_elapsed() {
        let mut rng = rng();
        let mut lineages = init_lineages(5, &mut rng);
        run_effect(&mut lineages, &mut rng, INITIAL_DELAY_MAX_MS + STEP_MS);
        assert!(lineages.iter().all(|l| l.star.is_some()));
    }

    #[test]
    fn test_empty_viewport_never_spawns() {
        let mut rng = rng();
        let mut lineages = init_lineages(5, &mut rng);
        update(&mut lineages, &mut rng, 60_000, 60_000, 0, HEIGHT, EffectSpeed::Normal);
        update(&mut lineages, &mut rng, 60_000, 120_000, WIDTH, 0, EffectSpeed::Normal);
        assert!(lineages.iter().all(|l| l.star.is_none()));
    }

    #[test]
    fn test_respawn_replaces_star_in_place() {
        let mut rng = rng();
        let mut lineages = init_lineages(1, &mut rng);
        run_effect(&mut lineages, &mut rng, INITIAL_DELAY_MAX_MS + STEP_MS);
        let first_origin = {
            let star = lineages[0].star.as_ref().unwrap();
            (star.origin_x, star.origin_y)
        };

        let before = lineages[0].cycles;
        run_effect(&mut lineages, &mut rng, 10_000);
        let star = lineages[0].star.as_ref().unwrap();

        assert!(lineages[0].cycles > before);
        assert!(star.age_ms < star.cycle_ms);
        assert_ne!((star.origin_x, star.origin_y), first_origin);
    }

    #[test]
    fn test_render_head_at_spawn_origin() {
        let star = ShootingStar {
            origin_x: 5.0,
            origin_y: 3.0,
            dir_x: -0.9,
            dir_y: 0.45,
            pace: 1.0,
            age_ms: 0,
            dist_cells: 0.0,
            cycle_ms: 1200,
            trail_len: 5,
            char_seed: 1,
        };
        let lineages = vec![StarLineage {
            delay_ms: 0,
            star: Some(star),
            cycles: 0,
        }];

        assert!(render_char(&lineages, 5, 3, ColorTheme::Silver).is_some());
        assert!(render_char(&lineages, 40, 20, ColorTheme::Silver).is_none());
    }
}
