//! Color helpers for the star effect.

use ratatui::style::Color;

/// Color of the bright star head.
pub const HEAD_COLOR: Color = Color::Rgb(235, 240, 255);

/// Color for a trail cell. Intensity 1.0 sits just behind the head;
/// 0.0 fades into the background.
pub fn trail_color(hue: f32, intensity: f32) -> Color {
    let intensity = intensity.clamp(0.0, 1.0);
    let saturation = 0.35 + intensity * 0.3;
    let lightness = 0.14 + intensity * 0.5;
    hsl_to_rgb(hue, saturation, lightness)
}

/// Color for a backdrop twinkle. Brightness tiers 0..=2, dim to bright,
/// tinted toward the theme hue but kept faint so the shooting stars read
/// on top.
pub fn backdrop_color(hue: f32, tier: u8) -> Color {
    let lightness = match tier {
        0 => 0.18,
        1 => 0.28,
        _ => 0.40,
    };
    hsl_to_rgb(hue, 0.25, lightness)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_grayscale_when_unsaturated() {
        assert_eq!(hsl_to_rgb(120.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }

    #[test]
    fn test_trail_color_brightens_with_intensity() {
        let dim = trail_color(225.0, 0.1);
        let bright = trail_color(225.0, 1.0);
        let (Color::Rgb(_, _, db), Color::Rgb(_, _, bb)) = (dim, bright) else {
            panic!("expected rgb colors");
        };
        assert!(bb > db);
    }
}
