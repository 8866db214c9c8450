//! Paragraph lines that slide in from alternating sides while typing out.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ParagraphConfig;
use crate::easing::{clamp, ease_out_cubic, normalize_progress, ramp};

/// Horizontal distance beyond the viewport width a group starts from
const TRAVEL_MARGIN: f64 = 360.0;
const MIN_OPACITY: f64 = 0.12;
const MAX_BLUR: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Sign of the off-screen offset for lines entering from this side
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A line of paragraph text; read-only input to the typewriter
#[derive(Debug, Clone, PartialEq)]
pub struct MovementLine {
    text: String,
    char_len: usize,
    from: Side,
}

impl MovementLine {
    pub fn new(text: &str, from: Side) -> Self {
        let text = text.trim().to_string();
        let char_len = text.chars().count();
        Self { text, char_len, from }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn from(&self) -> Side {
        self.from
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Characters visible at `line_local` reveal progress
    pub fn revealed_chars(&self, line_local: f64) -> usize {
        let local = normalize_progress(line_local);
        ((self.char_len as f64 * local).floor() as usize).min(self.char_len)
    }

    /// The first `chars` characters of the line
    pub fn prefix(&self, chars: usize) -> &str {
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// Presentation state for one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineFrame {
    /// Position in document order
    pub line: usize,
    pub from: Side,
    /// Position within its side's group
    pub group_index: usize,
    pub line_local: f64,
    pub revealed_chars: usize,
    pub text: String,
    pub typing: bool,
    pub offset_x: f64,
    pub opacity: f64,
    pub blur: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphFrame {
    pub progress: f64,
    pub hold_span: f64,
    pub paragraph_local: f64,
    pub eased: f64,
    pub lines: Vec<LineFrame>,
}

impl ParagraphFrame {
    /// Index (document order) of the line carrying the typing indicator
    pub fn typing_line(&self) -> Option<usize> {
        self.lines.iter().find(|l| l.typing).map(|l| l.line)
    }
}

/// Lines plus the clamps used to map the hero's hold span into this region
#[derive(Debug, Clone)]
pub struct ParagraphTypewriter {
    lines: Vec<MovementLine>,
    /// (group index, line count of that group) per line, document order
    groups: Vec<(usize, usize)>,
    min_center_hold: f64,
    max_center_hold: f64,
}

impl ParagraphTypewriter {
    pub fn new(lines: Vec<MovementLine>, min_center_hold: f64, max_center_hold: f64) -> Self {
        let left = lines.iter().filter(|l| l.from == Side::Left).count();
        let right = lines.len() - left;
        let mut seen_left = 0;
        let mut seen_right = 0;
        let groups = lines
            .iter()
            .map(|line| match line.from {
                Side::Left => {
                    seen_left += 1;
                    (seen_left - 1, left)
                }
                Side::Right => {
                    seen_right += 1;
                    (seen_right - 1, right)
                }
            })
            .collect();

        let (min_center_hold, max_center_hold) = if min_center_hold <= max_center_hold {
            (min_center_hold, max_center_hold)
        } else {
            warn!(min_center_hold, max_center_hold, "center hold clamps inverted, swapping");
            (max_center_hold, min_center_hold)
        };

        Self {
            lines,
            groups,
            min_center_hold,
            max_center_hold,
        }
    }

    pub fn from_config(config: &ParagraphConfig) -> Self {
        let lines = config
            .lines
            .iter()
            .map(|line| MovementLine::new(&line.text, line.from))
            .collect();
        Self::new(lines, config.min_center_hold, config.max_center_hold)
    }

    pub fn lines(&self) -> &[MovementLine] {
        &self.lines
    }

    /// Map the hero's hold span into this region's own progress scale
    pub fn hold_span_absolute(&self, hero_hold_span: f64, hero_px: f64, movement_px: f64) -> f64 {
        if movement_px > 0.0 {
            clamp(
                hero_hold_span * hero_px / movement_px,
                self.min_center_hold,
                self.max_center_hold,
            )
        } else {
            hero_hold_span
        }
    }

    /// Compute every line for `progress` through the paragraph region
    pub fn frame(&self, progress: f64, hold_span: f64, viewport_width: f64) -> ParagraphFrame {
        let progress = normalize_progress(progress);
        let paragraph_local = ramp(progress, 0.0, 1.0 - hold_span);
        let eased = ease_out_cubic(paragraph_local);
        let travel = viewport_width + TRAVEL_MARGIN;
        let opacity = MIN_OPACITY + (1.0 - MIN_OPACITY) * eased;
        let blur = (1.0 - eased) * MAX_BLUR;

        let mut typing_found = false;
        let lines = self
            .lines
            .iter()
            .zip(&self.groups)
            .enumerate()
            .map(|(index, (line, &(group_index, group_len)))| {
                let sweep = paragraph_local * group_len as f64;
                let line_local = clamp(sweep - group_index as f64, 0.0, 1.0);
                let revealed_chars = line.revealed_chars(line_local);
                let typing =
                    !typing_found && line_local > 0.0 && line_local < 1.0 && revealed_chars > 0;
                typing_found |= typing;

                LineFrame {
                    line: index,
                    from: line.from,
                    group_index,
                    line_local,
                    revealed_chars,
                    text: line.prefix(revealed_chars).to_string(),
                    typing,
                    offset_x: line.from.sign() * (1.0 - eased) * travel,
                    opacity,
                    blur,
                }
            })
            .collect();

        ParagraphFrame {
            progress,
            hold_span,
            paragraph_local,
            eased,
            lines,
        }
    }

    /// Every line fully revealed and at rest
    pub fn settled_frame(&self) -> ParagraphFrame {
        let lines = self
            .lines
            .iter()
            .zip(&self.groups)
            .enumerate()
            .map(|(index, (line, &(group_index, _)))| LineFrame {
                line: index,
                from: line.from,
                group_index,
                line_local: 1.0,
                revealed_chars: line.char_len,
                text: line.text.clone(),
                typing: false,
                offset_x: 0.0,
                opacity: 1.0,
                blur: 0.0,
            })
            .collect();

        ParagraphFrame {
            progress: 1.0,
            hold_span: 0.0,
            paragraph_local: 1.0,
            eased: 1.0,
            lines,
        }
    }
}
