use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use tracing::info;

use kinetype_core::{AppConfig, RenderCoordinator, Scene, Signal};
use kinetype_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::ScrollConfigExt,
    widgets::{HeroWidget, ParagraphWidget, StatusBarWidget},
    App, CellMeasure, FrameRequests, FrameStore, Theme,
};

pub fn run(config: Arc<AppConfig>, reduced_motion: bool) -> Result<()> {
    // Build the scene before touching the terminal so config errors print normally
    let scene = Scene::from_config(&config)?;
    let mut coordinator = RenderCoordinator::new(scene);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("kinetype"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &config, &mut coordinator, reduced_motion);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(frames = coordinator.frames_rendered(), "preview closed");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Arc<AppConfig>,
    coordinator: &mut RenderCoordinator,
    reduced_motion: bool,
) -> Result<()> {
    let theme = Theme::default();
    let measure = CellMeasure;
    let mut app = App::new(config.clone(), reduced_motion);
    let mut store = FrameStore::default();
    let mut requests = FrameRequests::default();

    let size = terminal.size()?;
    // Last row is the status bar
    app.resize(size.width, size.height.saturating_sub(1));

    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );

    info!(reduced_motion, cols = app.cols, rows = app.rows, "starting preview");
    if reduced_motion {
        app.set_status("reduced motion: showing the settled title");
    }
    coordinator.start(reduced_motion, &app, &measure, &mut store);

    // Checked at the end of each iteration to pick the next tick rate
    let mut needs_fast_update = false;

    loop {
        if app.update_scroll() {
            coordinator.signal(Signal::Scroll, &mut requests);
        }

        // Run the pending frame, reading the page as it is now
        if requests.take() {
            coordinator.on_frame(&app, &measure, &mut store);
        }

        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            frame.render_widget(
                Block::default().style(Style::default().bg(theme.bg)),
                main_layout[0],
            );
            if let Some(scene) = store.frame() {
                ParagraphWidget::render(frame, main_layout[0], &app, scene, &theme);
                HeroWidget::render(frame, main_layout[0], &app, scene, &theme);
            }
            StatusBarWidget::render(frame, main_layout[1], &app, &store, &requests, &theme);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.clear_status();
                    app.handle_action(handle_key_event(key));
                }
                AppEvent::Resize(width, height) => {
                    app.resize(width, height.saturating_sub(1));
                    coordinator.signal(Signal::Resize, &mut requests);
                    if app.reduced_motion {
                        // Static mode never schedules; redraw the settled pose at the new size
                        coordinator.on_frame(&app, &measure, &mut store);
                    }
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_scroll_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
