use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::host::{FrameRequests, FrameStore};
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        store: &FrameStore,
        requests: &FrameRequests,
        theme: &Theme,
    ) {
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let motion = if app.reduced_motion { " | STATIC" } else { "" };
            match store.frame() {
                Some(scene) => format!(
                    " {} {:.3} | lines {:.3} | {:.0}/{:.0}px | frames {}/{}{}",
                    scene.hero.phase.label(),
                    scene.hero.progress,
                    scene.paragraphs.progress,
                    app.scroll_position(),
                    app.max_scroll(),
                    store.presented(),
                    requests.total(),
                    motion,
                ),
                None => format!(" waiting for first frame{}", motion),
            }
        };

        let help_hint = " q:quit j/k:scroll d/u:half f/b:page g/G:top/bottom ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.status_fg).bg(theme.status_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.status_dim).bg(theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
