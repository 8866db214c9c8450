//! Interfaces to the host environment.
//!
//! The engine never touches presentation objects; it reads geometry and text
//! metrics through these traits and hands finished frames to a sink.

use crate::sampler::{RegionBox, Viewport};
use crate::scene::SceneFrame;
use crate::style::{FontSlant, WordStyle};

/// Smallest gap reported between the two title words, in pixels
pub const MIN_PAIR_GAP: f64 = 4.0;

/// Supplies raw scroll geometry for both regions
pub trait ProgressSource {
    fn viewport(&self) -> Viewport;
    fn hero_region(&self) -> RegionBox;
    fn movement_region(&self) -> RegionBox;
}

/// Measures rendered text widths
pub trait TextMeasure {
    /// Font size of the title in pixels
    fn font_size(&self) -> f64;

    /// Width of `text` rendered in `style`
    fn text_width(&self, text: &str, style: WordStyle<'_>) -> f64;

    /// Width of the space between `first` and `last` laid out as "first last"
    fn pair_gap(&self, first: &str, last: &str, style: WordStyle<'_>) -> f64 {
        let full = self.text_width(&format!("{} {}", first, last), style);
        let first_width = self.text_width(first, style);
        let last_width = self.text_width(last, style);
        (full - first_width - last_width).max(MIN_PAIR_GAP)
    }
}

/// Receives each computed frame
pub trait PresentationSink {
    fn present(&mut self, frame: &SceneFrame);
}

/// Runs a callback once before the next paint
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Headless measurement: every glyph advances by a fixed share of the font
/// size, widened slightly for heavy weights and italics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasure {
    pub font_size: f64,
    /// Glyph advance in em
    pub advance_em: f64,
    /// Space advance in em
    pub space_em: f64,
}

impl FixedAdvanceMeasure {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            advance_em: 0.55,
            space_em: 0.25,
        }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn text_width(&self, text: &str, style: WordStyle<'_>) -> f64 {
        let weight_factor = 1.0 + (style.weight as f64 - 400.0) / 4000.0;
        let slant_factor = match style.slant {
            FontSlant::Normal => 1.0,
            FontSlant::Italic => 0.97,
        };
        let spacing = style.letter_spacing_em * self.font_size;

        text.chars()
            .map(|c| {
                let advance = if c.is_whitespace() {
                    self.space_em
                } else {
                    self.advance_em * weight_factor * slant_factor
                };
                advance * self.font_size + spacing
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(weight: u16) -> WordStyle<'static> {
        WordStyle {
            family: "serif",
            slant: FontSlant::Normal,
            weight,
            letter_spacing_em: 0.0,
        }
    }

    #[test]
    fn test_fixed_advance_width() {
        let m = FixedAdvanceMeasure::new(100.0);
        assert!((m.text_width("abcd", style(400)) - 220.0).abs() < 1e-9);
        assert!(m.text_width("abcd", style(900)) > m.text_width("abcd", style(200)));
        assert_eq!(m.text_width("", style(400)), 0.0);
    }

    #[test]
    fn test_pair_gap_is_the_space() {
        let m = FixedAdvanceMeasure::new(100.0);
        assert!((m.pair_gap("Bryan", "Xu", style(400)) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_gap_floor() {
        let m = FixedAdvanceMeasure {
            font_size: 10.0,
            advance_em: 0.5,
            space_em: 0.0,
        };
        assert_eq!(m.pair_gap("a", "b", style(400)), MIN_PAIR_GAP);
    }
}
