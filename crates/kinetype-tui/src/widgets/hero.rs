use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use kinetype_core::hero::{HeroFrame, WordPose, WordSlot};
use kinetype_core::style::{FontSlant, WordStyle};
use kinetype_core::{ProgressSource, SceneFrame};

use super::put_str;
use crate::app::App;
use crate::host::CellMeasure;
use crate::theme::Theme;

/// Weight at which glyphs are drawn bold
const BOLD_WEIGHT: u16 = 600;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, scene: &SceneFrame, theme: &Theme) {
        let hero = &scene.hero;
        let region = app.hero_region();
        let viewport_height = app.viewport().height;
        // The title stays pinned until the bottom of its section scrolls into view
        let pinned_offset = (region.top + region.height - viewport_height).min(0.0);

        let center_col = area.x as i32 + area.width as i32 / 2;
        let center_row = area.y as i32
            + area.height as i32 / 2
            + CellMeasure::rows(pinned_offset + hero.group.translate_y);

        let first_count = hero.letters.iter().filter(|l| l.word == WordSlot::First).count();
        let measure = CellMeasure;
        let buf = frame.buffer_mut();

        for letter in &hero.letters {
            if letter.glyph.is_empty() {
                continue;
            }
            let (word, style, position) = match letter.word {
                WordSlot::First => (&hero.first, hero.style.left(), letter.index),
                WordSlot::Last => (&hero.last, hero.style.right(), letter.index - first_count),
            };
            let rest_x = word.x + prefix_width(&measure, &word.text, position, style);
            let scaled_x = rest_x * hero.group.scale * word.scale;

            let col = center_col + CellMeasure::columns(scaled_x + letter.pose.dx);
            let row = center_row + CellMeasure::rows(letter.pose.dy);
            let style = glyph_style(theme, hero, word, style, letter.pose.opacity, letter.pose.blur);
            put_str(buf, area, col, row, &letter.glyph, style);
        }
    }
}

fn prefix_width(measure: &CellMeasure, text: &str, chars: usize, style: WordStyle<'_>) -> f64 {
    text.chars().take(chars).map(|c| measure.advance(c, style)).sum()
}

fn glyph_style(
    theme: &Theme,
    hero: &HeroFrame,
    word: &WordPose,
    style: WordStyle<'_>,
    letter_opacity: f64,
    letter_blur: f64,
) -> Style {
    let base = if hero.is_final_style() { theme.accent } else { theme.fg };
    let opacity = hero.group.opacity * word.opacity * letter_opacity;
    let blur = hero.group.blur + word.blur + letter_blur;

    let mut modifiers = Modifier::empty();
    if style.slant == FontSlant::Italic {
        modifiers |= Modifier::ITALIC;
    }
    if style.weight >= BOLD_WEIGHT {
        modifiers |= Modifier::BOLD;
    }

    Style::default()
        .fg(theme.fade(base, opacity, blur))
        .bg(theme.bg)
        .add_modifier(modifiers)
}
