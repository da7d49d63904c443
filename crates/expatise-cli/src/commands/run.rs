use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tracing::{error, info};

use expatise_core::{countdown, theme::detect_prefers_dark, theme::FileThemeStore, AppConfig};
use expatise_tui::{
    app::{App, Screen},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{BottomNavWidget, HomeWidget, ProfileWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, config_path: PathBuf) -> Result<()> {
    let theme_store = FileThemeStore::new(config.data_dir());

    let mut app = App::new(
        config,
        Box::new(theme_store),
        detect_prefers_dark(),
        countdown::today(),
    )
    .with_config_path(config_path);

    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms, app.frame_interval());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Expatise"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("TUI exited with error: {}", e);
    } else {
        info!("TUI stopped");
    }
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| draw(frame, app))?;

        // Poll faster while the card row is animating
        let event = if app.needs_animation_frame() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                handle_action(app, action);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse, Instant::now()),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    // Any key press clears a stale status message
    if !matches!(action, Action::None) && !app.is_input_mode() {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::SwitchScreen(screen) => app.switch_screen(screen),
        Action::NextScreen => app.switch_screen(app.screen.next()),
        Action::ToggleTheme => app.toggle_theme(),
        Action::EditDate => app.start_edit_date(),
        Action::PickAvatar => app.start_avatar_path(),
        Action::MoveUp => {
            if app.screen == Screen::Profile {
                app.select_prev_setting();
            }
        }
        Action::MoveDown => {
            if app.screen == Screen::Profile {
                app.select_next_setting();
            }
        }
        Action::Select => app.activate_setting(),
        Action::Confirm => app.confirm_input(countdown::today()),
        Action::Cancel => app.cancel_input(),
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
        Action::None => {}
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let [main, nav, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match app.screen {
        Screen::Home => HomeWidget::render(frame, main, app),
        Screen::Profile => ProfileWidget::render(frame, main, app),
    }
    BottomNavWidget::render(frame, nav, app);
    StatusBarWidget::render(frame, status, app);
}
