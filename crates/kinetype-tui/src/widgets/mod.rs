mod hero;
mod paragraph;
mod status_bar;

pub use hero::HeroWidget;
pub use paragraph::ParagraphWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

/// Write `text` starting at a possibly off-screen cell, clipping to `area`
fn put_str(buf: &mut Buffer, area: Rect, col: i32, row: i32, text: &str, style: Style) {
    if row < area.top() as i32 || row >= area.bottom() as i32 {
        return;
    }
    let mut x = col;
    for c in text.chars() {
        let width = c.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        if x >= area.left() as i32 && x + width <= area.right() as i32 {
            if let Some(cell) = buf.cell_mut((x as u16, row as u16)) {
                cell.set_char(c).set_style(style);
            }
        }
        x += width;
    }
}
