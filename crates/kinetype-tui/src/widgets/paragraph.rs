use ratatui::{
    layout::Rect,
    style::Style,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use kinetype_core::{ProgressSource, SceneFrame};

use super::put_str;
use crate::app::{App, CELL_HEIGHT_PX};
use crate::host::CellMeasure;
use crate::theme::Theme;

const CURSOR: &str = "▌";

pub struct ParagraphWidget;

impl ParagraphWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, scene: &SceneFrame, theme: &Theme) {
        let region = app.movement_region();
        let viewport_height = app.viewport().height;
        if region.top >= viewport_height || region.top + region.height <= 0.0 {
            return;
        }

        // Enter from below, stay pinned, then leave with the section's bottom
        let shift = region.top.max(0.0) + (region.top + region.height - viewport_height).min(0.0);
        let lines = &scene.paragraphs.lines;
        let block_rows = (lines.len() * 2).saturating_sub(1) as i32;
        let top_row = area.y as i32
            + (area.height as i32 - block_rows) / 2
            + (shift / CELL_HEIGHT_PX).round() as i32;
        let center_col = area.x as i32 + area.width as i32 / 2;
        let buf = frame.buffer_mut();

        for (slot, line) in lines.iter().enumerate() {
            let full_width = app
                .config
                .paragraph
                .lines
                .get(line.line)
                .map(|l| l.text.trim().width())
                .unwrap_or_else(|| line.text.width()) as i32;

            let row = top_row + slot as i32 * 2;
            let col = center_col - full_width / 2 + CellMeasure::columns(line.offset_x);
            let fg = theme.fade(theme.fg, line.opacity, line.blur);
            put_str(buf, area, col, row, &line.text, Style::default().fg(fg).bg(theme.bg));

            if line.typing {
                let cursor_col = col + line.text.width() as i32;
                let cursor = theme.fade(theme.cursor, line.opacity, 0.0);
                put_str(buf, area, cursor_col, row, CURSOR, Style::default().fg(cursor).bg(theme.bg));
            }
        }
    }
}
