use std::sync::Arc;

use kinetype_core::{AppConfig, ProgressSource, RegionBox, Viewport};
use tracing::{debug, trace};

use crate::input::Action;
use crate::scroll::ScrollAnimator;

/// Virtual pixels per terminal column
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Virtual pixels per terminal row
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Preview state: a virtual page with the hero section followed by the
/// movement section, scrolled by a smooth animator.
pub struct App {
    pub config: Arc<AppConfig>,
    pub scroll: ScrollAnimator,
    /// Terminal size of the page area, in cells
    pub cols: u16,
    pub rows: u16,
    pub reduced_motion: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Scroll position last reported by `update_scroll`
    last_reported_scroll: f64,
}

impl App {
    pub fn new(config: Arc<AppConfig>, reduced_motion: bool) -> Self {
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());
        Self {
            config,
            scroll,
            cols: 80,
            rows: 24,
            reduced_motion,
            should_quit: false,
            status_message: None,
            last_reported_scroll: 0.0,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        debug!(cols = self.cols, rows = self.rows, max_scroll = self.max_scroll(), "page resized");
    }

    pub fn hero_height(&self) -> f64 {
        self.viewport().height * self.config.ui.hero_screens.max(0.0)
    }

    pub fn movement_height(&self) -> f64 {
        self.viewport().height * self.config.ui.movement_screens.max(0.0)
    }

    pub fn page_height(&self) -> f64 {
        self.hero_height() + self.movement_height()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.page_height() - self.viewport().height).max(0.0)
    }

    pub fn scroll_position(&self) -> f64 {
        self.scroll.current_scroll()
    }

    /// Advance smooth scrolling. Returns true when the page moved since the
    /// last call, including instant jumps made while handling input.
    pub fn update_scroll(&mut self) -> bool {
        let max_scroll = self.max_scroll();
        let current = self.scroll.update(max_scroll);
        let moved = current != self.last_reported_scroll;
        self.last_reported_scroll = current;
        moved
    }

    pub fn needs_scroll_update(&self) -> bool {
        self.scroll.needs_update()
    }

    fn line_step(&self) -> f64 {
        self.config.ui.scroll.scroll_lines.max(1) as f64 * CELL_HEIGHT_PX
    }

    pub fn handle_action(&mut self, action: Action) {
        let max_scroll = self.max_scroll();
        let page = self.viewport().height;
        let step = self.line_step();
        trace!(?action, "handling action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_by(step, max_scroll),
            Action::ScrollUp => self.scroll.scroll_by(-step, max_scroll),
            Action::HalfPageDown => self.scroll.scroll_by(page * 0.5, max_scroll),
            Action::HalfPageUp => self.scroll.scroll_by(-page * 0.5, max_scroll),
            Action::PageDown => self.scroll.scroll_by(page, max_scroll),
            Action::PageUp => self.scroll.scroll_by(-page, max_scroll),
            Action::JumpToTop => self.scroll.scroll_to(0.0, max_scroll),
            Action::JumpToBottom => self.scroll.scroll_to(max_scroll, max_scroll),
            Action::None => {}
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl ProgressSource for App {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.cols as f64 * CELL_WIDTH_PX,
            self.rows as f64 * CELL_HEIGHT_PX,
        )
    }

    fn hero_region(&self) -> RegionBox {
        RegionBox::new(-self.scroll_position(), self.hero_height())
    }

    fn movement_region(&self) -> RegionBox {
        RegionBox::new(self.hero_height() - self.scroll_position(), self.movement_height())
    }
}
