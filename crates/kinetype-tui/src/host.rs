//! Host trait implementations for the terminal preview.

use kinetype_core::style::WordStyle;
use kinetype_core::{FrameScheduler, PresentationSink, SceneFrame, TextMeasure};
use unicode_width::UnicodeWidthChar;

use crate::app::{CELL_HEIGHT_PX, CELL_WIDTH_PX};

/// Frame requests as a flag the event loop drains once per iteration
#[derive(Debug, Default)]
pub struct FrameRequests {
    pending: bool,
    total: u64,
}

impl FrameRequests {
    /// Clear and return the pending flag
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Frames requested over the session
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl FrameScheduler for FrameRequests {
    fn request_frame(&mut self) {
        self.pending = true;
        self.total += 1;
    }
}

/// Text measurement on the terminal grid: one column per narrow glyph, two
/// per wide glyph, plus letter spacing. The title is one row tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl CellMeasure {
    /// Column span of `width_px`, rounded to the nearest cell
    pub fn columns(width_px: f64) -> i32 {
        (width_px / CELL_WIDTH_PX).round() as i32
    }

    pub fn rows(height_px: f64) -> i32 {
        (height_px / CELL_HEIGHT_PX).round() as i32
    }

    /// Horizontal advance of a single character
    pub fn advance(&self, c: char, style: WordStyle<'_>) -> f64 {
        let cells = c.width().unwrap_or(0) as f64;
        cells * CELL_WIDTH_PX + style.letter_spacing_em * self.font_size()
    }
}

impl TextMeasure for CellMeasure {
    fn font_size(&self) -> f64 {
        CELL_HEIGHT_PX
    }

    fn text_width(&self, text: &str, style: WordStyle<'_>) -> f64 {
        text.chars().map(|c| self.advance(c, style)).sum()
    }
}

/// Keeps the most recent frame for the widgets
#[derive(Debug, Default)]
pub struct FrameStore {
    frame: Option<SceneFrame>,
    presented: u64,
}

impl FrameStore {
    pub fn frame(&self) -> Option<&SceneFrame> {
        self.frame.as_ref()
    }

    /// Frames presented over the session, including the first
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl PresentationSink for FrameStore {
    fn present(&mut self, frame: &SceneFrame) {
        self.frame = Some(frame.clone());
        self.presented += 1;
    }
}
