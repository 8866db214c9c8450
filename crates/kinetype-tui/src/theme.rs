use ratatui::style::Color;

/// Blur (px) at which a glyph is drawn fully washed out
const BLUR_WASHOUT_PX: f64 = 12.0;

/// Preview palette. Opacity and blur are simulated by blending glyph colors
/// toward the background.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub cursor: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub status_dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            accent: Color::Rgb(0xd8, 0xa6, 0x57),
            cursor: Color::Rgb(0x89, 0xb4, 0x82),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
            status_dim: Color::Rgb(0xa8, 0x99, 0x84),
        }
    }
}

impl Theme {
    /// Visibility in [0, 1] after applying opacity and blur
    pub fn visibility(opacity: f64, blur: f64) -> f64 {
        let opacity = if opacity.is_finite() { opacity.clamp(0.0, 1.0) } else { 0.0 };
        let blur = if blur.is_finite() { blur.max(0.0) } else { 0.0 };
        opacity * (1.0 - (blur / BLUR_WASHOUT_PX).min(1.0) * 0.6)
    }

    /// Blend `color` toward the background by the given visibility
    pub fn fade(&self, color: Color, opacity: f64, blur: f64) -> Color {
        let t = Self::visibility(opacity, blur);
        match (color, self.bg) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                mix(br, r, t),
                mix(bg, g, t),
                mix(bb, b, t),
            ),
            _ if t < 0.5 => self.bg,
            _ => color,
        }
    }
}

fn mix(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.fg, 1.0, 0.0), theme.fg);
        assert_eq!(theme.fade(theme.fg, 0.0, 0.0), theme.bg);
    }

    #[test]
    fn test_blur_dims_but_never_hides() {
        assert!(Theme::visibility(1.0, 3.0) < 1.0);
        assert!((Theme::visibility(1.0, 100.0) - 0.4).abs() < 1e-12);
        assert_eq!(Theme::visibility(f64::NAN, 0.0), 0.0);
    }
}
