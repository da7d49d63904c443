use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use expatise_core::config::SettingsLink;
use expatise_core::{AppConfig, AvatarPreview, Countdown, ThemeMode, ThemePreference, ThemeStore};
use tracing::{debug, warn};

use crate::scroll::{DragScroller, ScrollConfigExt, TickScheduler};
use crate::theme::Theme;
use crate::widgets::{DragRowState, RowCard};

/// Top-level screens reachable from the bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Profile,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Profile,
            Screen::Profile => Screen::Home,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Editing the exam date, holds the typed text
    EditDate(String),
    /// Typing the path of a new avatar image
    AvatarPath(String),
}

/// Rows of the profile settings list, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    ThemeToggle,
    Link(SettingsLink),
    LogOut,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 5] = [
        SettingsRow::ThemeToggle,
        SettingsRow::Link(SettingsLink::PrivacyPolicy),
        SettingsRow::Link(SettingsLink::AboutUs),
        SettingsRow::Link(SettingsLink::ExamRegistration),
        SettingsRow::LogOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::ThemeToggle => "Light / Dark Mode",
            SettingsRow::Link(SettingsLink::PrivacyPolicy) => "Privacy Policy",
            SettingsRow::Link(SettingsLink::AboutUs) => "About us",
            SettingsRow::Link(SettingsLink::ExamRegistration) => "Exam Registration",
            SettingsRow::LogOut => "Log Out",
        }
    }
}

/// Practice cards shown in the home row
pub fn default_cards() -> Vec<RowCard> {
    vec![
        RowCard::new("Practice Test", "100 questions"),
        RowCard::new("Mock Exam", "Timed, 45 min"),
        RowCard::new("Road Signs", "Flashcards"),
        RowCard::new("Traffic Rules", "By chapter"),
        RowCard::new("Weak Spots", "Review mistakes"),
        RowCard::new("Bookmarks", "Saved questions"),
        RowCard::new("Statistics", "Your progress"),
    ]
}

/// Application state
pub struct App {
    pub config: AppConfig,
    /// Where confirmed settings are written, `None` to keep them in memory
    pub config_path: Option<PathBuf>,
    pub screen: Screen,
    pub mode: Mode,
    pub theme: Theme,
    theme_pref: ThemePreference<Box<dyn ThemeStore>>,
    pub countdown: Countdown,
    pub cards: Vec<RowCard>,
    pub row: DragRowState,
    pub scroller: DragScroller<TickScheduler>,
    pub avatar: AvatarPreview,
    pub selected_setting: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    frame_interval: Duration,
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(
        mut config: AppConfig,
        theme_store: Box<dyn ThemeStore>,
        prefers_dark: bool,
        today: NaiveDate,
    ) -> Self {
        config.ui = config.ui.validated();
        let theme_pref = ThemePreference::hydrate(theme_store, prefers_dark);
        let theme = Theme::for_mode(theme_pref.mode());

        let mut status_message = None;
        let countdown = match Countdown::parse(&config.exam.test_date, today) {
            Ok(countdown) => countdown,
            Err(e) => {
                warn!("Invalid exam date in config: {}", e);
                status_message = Some(format!("Invalid exam date in config: {}", e));
                Countdown::parse(&expatise_core::config::ExamConfig::default().test_date, today)
                    .unwrap_or_else(|_| Countdown::new(today, today))
            }
        };

        let scroller = DragScroller::new(config.scroll.clone(), TickScheduler::new());
        let frame_interval = scroller.config().animation_tick_duration();

        Self {
            config,
            config_path: None,
            screen: Screen::Home,
            mode: Mode::Normal,
            theme,
            theme_pref,
            countdown,
            cards: default_cards(),
            row: DragRowState::new(),
            scroller,
            avatar: AvatarPreview::new(),
            selected_setting: 0,
            status_message,
            should_quit: false,
            frame_interval,
            last_frame: None,
        }
    }

    /// Persist confirmed settings to this file
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_pref.mode()
    }

    /// Interval between animation frames
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn is_input_mode(&self) -> bool {
        !matches!(self.mode, Mode::Normal)
    }

    /// The scroller has frames waiting; the loop should poll faster
    pub fn needs_animation_frame(&self) -> bool {
        self.scroller.scheduler().has_pending()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Deliver due animation frames, at most once per frame interval
    pub fn tick(&mut self, now: Instant) {
        if !self.scroller.scheduler().has_pending() {
            self.last_frame = None;
            return;
        }
        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.frame_interval {
                return;
            }
        }
        self.last_frame = Some(now);

        let surface = if self.screen == Screen::Home && self.row.is_attached() {
            Some(&mut self.row)
        } else {
            None
        };
        self.scroller.tick(now, surface);
    }

    /// Route a mouse event to the card row
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.screen != Screen::Home || self.is_input_mode() {
            return;
        }
        let inside = self.row.contains(mouse.column, mouse.row);
        let x = mouse.column as f64;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.scroller.pointer_down(x, Some(&self.row));
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if inside {
                    self.scroller.pointer_move(x, Some(&mut self.row));
                } else if self.scroller.is_dragging() {
                    debug!("pointer left the row while dragging");
                    self.scroller.pointer_leave(now, Some(&self.row));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.scroller.pointer_up(now, Some(&self.row));
            }
            MouseEventKind::Moved if !inside && self.scroller.is_dragging() => {
                self.scroller.pointer_leave(now, Some(&self.row));
            }
            _ => {}
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        // The row is not drawn on other screens
        self.cancel_row_gesture();
        self.screen = screen;
        self.clear_status();
    }

    /// Stop any drag or animation on the row, leaving it in range
    fn cancel_row_gesture(&mut self) {
        self.scroller.cancel_drag(Some(&mut self.row));
        self.scroller.cancel_animation();
    }

    pub fn toggle_theme(&mut self) {
        let result = self.theme_pref.toggle();
        self.theme = Theme::for_mode(self.theme_pref.mode());
        match result {
            Ok(mode) => self.set_status(format!("Switched to {} mode", mode)),
            Err(e) => {
                warn!("Failed to save theme: {}", e);
                self.set_status(format!("Theme changed but not saved: {}", e));
            }
        }
    }

    pub fn start_edit_date(&mut self) {
        if self.screen == Screen::Home {
            self.cancel_row_gesture();
            self.mode = Mode::EditDate(self.countdown.to_config_value());
        }
    }

    pub fn start_avatar_path(&mut self) {
        if self.screen == Screen::Profile {
            self.cancel_row_gesture();
            self.mode = Mode::AvatarPath(String::new());
        }
    }

    pub fn input_char(&mut self, c: char) {
        match &mut self.mode {
            Mode::EditDate(buffer) | Mode::AvatarPath(buffer) => buffer.push(c),
            Mode::Normal => {}
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.mode {
            Mode::EditDate(buffer) | Mode::AvatarPath(buffer) => {
                buffer.pop();
            }
            Mode::Normal => {}
        }
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn confirm_input(&mut self, today: NaiveDate) {
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::EditDate(input) => self.apply_exam_date(&input, today),
            Mode::AvatarPath(input) => self.apply_avatar(&input),
            Mode::Normal => {}
        }
    }

    fn apply_exam_date(&mut self, input: &str, today: NaiveDate) {
        match Countdown::parse(input, today) {
            Ok(countdown) => {
                self.config.exam.test_date = countdown.to_config_value();
                self.countdown = countdown;
                match self.save_config() {
                    Ok(()) => self.set_status(format!("Exam date set to {}", self.countdown.formatted)),
                    Err(e) => {
                        warn!("Failed to save config: {}", e);
                        self.set_status(format!("Exam date changed but not saved: {}", e));
                    }
                }
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn apply_avatar(&mut self, input: &str) {
        let path = input.trim();
        if path.is_empty() {
            return;
        }
        match self.avatar.select(path) {
            Ok(handle) => {
                let message = format!(
                    "Avatar set to {} ({}x{})",
                    handle.file_name(),
                    handle.width,
                    handle.height
                );
                self.set_status(message);
            }
            Err(e) => self.set_status(format!("Could not use avatar: {}", e)),
        }
    }

    fn save_config(&self) -> expatise_core::Result<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }

    pub fn select_next_setting(&mut self) {
        self.selected_setting = (self.selected_setting + 1) % SettingsRow::ALL.len();
    }

    pub fn select_prev_setting(&mut self) {
        self.selected_setting = self
            .selected_setting
            .checked_sub(1)
            .unwrap_or(SettingsRow::ALL.len() - 1);
    }

    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected_setting % SettingsRow::ALL.len()]
    }

    /// Activate the highlighted settings row
    pub fn activate_setting(&mut self) {
        if self.screen != Screen::Profile {
            return;
        }
        match self.selected_row() {
            SettingsRow::ThemeToggle => self.toggle_theme(),
            SettingsRow::Link(link) => self.open_link(link),
            SettingsRow::LogOut => self.should_quit = true,
        }
    }

    fn open_link(&mut self, link: SettingsLink) {
        let label = SettingsRow::Link(link).label();
        match self.config.profile.link_url(link) {
            Ok(Some(url)) => {
                if let Err(e) = open::that(url.as_str()) {
                    self.set_status(format!("Failed to open {}: {}", label, e));
                }
            }
            Ok(None) => self.set_status(format!("No link configured for {}", label)),
            Err(e) => self.set_status(format!("Invalid link for {}: {}", label, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use expatise_core::theme::MemoryThemeStore;
    use ratatui::layout::Rect;

    use crate::scroll::ScrollSurface;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    fn app() -> App {
        App::new(
            AppConfig::default(),
            Box::new(MemoryThemeStore::default()),
            true,
            today(),
        )
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// App with the row laid out at x=10, 40 columns wide, 7 cards of 24
    fn laid_out() -> App {
        let mut app = app();
        app.row.set_layout(Rect::new(10, 5, 40, 4), app.cards.len(), 24, 2);
        app
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.countdown.days_left, 10);
        assert!(!app.needs_animation_frame());
    }

    #[test]
    fn test_invalid_config_date_falls_back() {
        let mut config = AppConfig::default();
        config.exam.test_date = "soon".to_string();
        let app = App::new(config, Box::new(MemoryThemeStore::default()), true, today());
        assert_eq!(app.countdown.to_config_value(), "2025-04-20");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_drag_scrolls_row() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        assert!(app.scroller.is_dragging());
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);
        assert_eq!(app.row.scroll_offset(), 10.0);
    }

    #[test]
    fn test_down_outside_row_is_ignored() {
        let mut app = laid_out();
        app.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 40, 0),
            Instant::now(),
        );
        assert!(!app.scroller.is_dragging());
    }

    #[test]
    fn test_leaving_row_releases_drag() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 20), now);
        assert!(!app.scroller.is_dragging());
        // Last move was fast enough to fling
        assert!(app.needs_animation_frame());
    }

    #[test]
    fn test_fling_animates_through_ticks() {
        let mut app = laid_out();
        let mut now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 35, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 35, 6), now);
        assert!(app.needs_animation_frame());

        let after_drag = app.row.scroll_offset();
        for _ in 0..3000 {
            if !app.needs_animation_frame() {
                break;
            }
            now += Duration::from_millis(16);
            app.tick(now);
        }
        assert!(!app.needs_animation_frame());
        assert!(app.row.scroll_offset() > after_drag);
        let max = app.row.max_scroll_offset();
        assert!((0.0..=max).contains(&app.row.scroll_offset()));
    }

    #[test]
    fn test_tick_is_rate_limited() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 6), now);

        app.tick(now);
        let after_first = app.row.scroll_offset();
        app.tick(now + Duration::from_millis(1));
        assert_eq!(app.row.scroll_offset(), after_first);
        app.tick(now + Duration::from_millis(40));
        assert_ne!(app.row.scroll_offset(), after_first);
    }

    #[test]
    fn test_switching_screen_stops_animation() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 6), now);
        assert!(app.needs_animation_frame());

        app.switch_screen(Screen::Profile);
        assert!(!app.needs_animation_frame());
        assert!(!app.scroller.is_animating());
    }

    #[test]
    fn test_switching_screen_ends_drag() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);
        assert!(app.scroller.is_dragging());

        app.switch_screen(Screen::Profile);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 6), now);
        app.switch_screen(Screen::Home);
        assert!(!app.scroller.is_dragging());
        assert!(!app.needs_animation_frame());

        // A later drag without a press does not move the row
        let offset = app.row.scroll_offset();
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 6), now);
        assert_eq!(app.row.scroll_offset(), offset);
    }

    #[test]
    fn test_switching_screen_mid_drag_settles_row_in_range() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 20, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 6), now);
        assert_eq!(app.row.scroll_offset(), -20.0);

        app.switch_screen(Screen::Profile);
        assert_eq!(app.row.scroll_offset(), 0.0);
    }

    #[test]
    fn test_editing_date_ends_drag() {
        let mut app = laid_out();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 6), now);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 6), now);

        app.start_edit_date();
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 6), now);
        app.cancel_input();

        assert!(!app.scroller.is_dragging());
        let offset = app.row.scroll_offset();
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 6), now);
        assert_eq!(app.row.scroll_offset(), offset);
    }

    #[test]
    fn test_frame_interval_follows_config() {
        let mut config = AppConfig::default();
        config.scroll.animation_fps = 30;
        let app = App::new(config, Box::new(MemoryThemeStore::default()), true, today());
        assert_eq!(app.frame_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_oversized_card_width_is_clamped() {
        let mut config = AppConfig::default();
        config.ui.card_width = u16::MAX;
        let app = App::new(config, Box::new(MemoryThemeStore::default()), true, today());
        assert_eq!(app.config.ui.card_width, expatise_core::config::UiConfig::MAX_CARD_WIDTH);
    }

    #[test]
    fn test_unlaid_row_ends_animation() {
        let mut app = app();
        // Not laid out yet: pointer handlers still see a zero-size row
        app.row.set_scroll_offset(5.0);
        let now = Instant::now();
        app.scroller.pointer_down(3.0, Some(&app.row));
        app.scroller.pointer_move(1.0, Some(&mut app.row));
        app.scroller.pointer_up(now, Some(&app.row));
        assert!(app.needs_animation_frame());

        app.tick(now);
        assert!(!app.scroller.is_animating());
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = app();
        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert_eq!(app.theme, Theme::light());
        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_edit_exam_date() {
        let mut app = app();
        app.start_edit_date();
        assert_eq!(app.mode, Mode::EditDate("2025-04-20".to_string()));

        for _ in 0..2 {
            app.backspace();
        }
        app.input_char('3');
        app.input_char('0');
        app.confirm_input(today());

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.countdown.days_left, 20);
        assert_eq!(app.config.exam.test_date, "2025-04-30");
    }

    #[test]
    fn test_invalid_exam_date_keeps_previous() {
        let mut app = app();
        app.mode = Mode::EditDate("2025-13-01".to_string());
        app.confirm_input(today());
        assert_eq!(app.config.exam.test_date, "2025-04-20");
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .contains("Invalid exam date"));
    }

    #[test]
    fn test_cancel_input() {
        let mut app = app();
        app.start_edit_date();
        app.input_char('x');
        app.cancel_input();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.config.exam.test_date, "2025-04-20");
    }

    #[test]
    fn test_avatar_rejects_bad_path() {
        let mut app = app();
        app.switch_screen(Screen::Profile);
        app.start_avatar_path();
        for c in "/nonexistent/notes.txt".chars() {
            app.input_char(c);
        }
        app.confirm_input(today());
        assert!(app.avatar.current().is_none());
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .starts_with("Could not use avatar"));
    }

    #[test]
    fn test_settings_navigation_wraps() {
        let mut app = app();
        app.select_prev_setting();
        assert_eq!(app.selected_row(), SettingsRow::LogOut);
        app.select_next_setting();
        assert_eq!(app.selected_row(), SettingsRow::ThemeToggle);
    }

    #[test]
    fn test_activate_settings() {
        let mut app = app();
        app.switch_screen(Screen::Profile);

        app.activate_setting();
        assert_eq!(app.theme_mode(), ThemeMode::Light);

        app.select_next_setting();
        app.activate_setting();
        assert_eq!(
            app.status_message.as_deref(),
            Some("No link configured for Privacy Policy")
        );

        app.selected_setting = SettingsRow::ALL.len() - 1;
        app.activate_setting();
        assert!(app.should_quit);
    }
}
