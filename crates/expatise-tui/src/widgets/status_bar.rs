use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode, Screen};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let (status_text, status_style) = match &app.mode {
            Mode::EditDate(input) => (
                format!(" Exam date (YYYY-MM-DD): {}_", input),
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Mode::AvatarPath(input) => (
                format!(" Avatar image path: {}_", input),
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Mode::Normal => match &app.status_message {
                Some(msg) => (
                    format!(" {}", msg),
                    Style::default().fg(theme.fg0).bg(theme.bg2),
                ),
                None => {
                    let screen = match app.screen {
                        Screen::Home => "HOME",
                        Screen::Profile => "PROFILE",
                    };
                    (
                        format!(" {} | {} mode", screen, app.theme_mode()),
                        Style::default().fg(theme.fg1).bg(theme.bg2),
                    )
                }
            },
        };

        let help_hint = match (&app.mode, app.screen) {
            (Mode::Normal, Screen::Home) => " q:quit tab:profile e:date t:theme drag:scroll ",
            (Mode::Normal, Screen::Profile) => " q:quit tab:home j/k:move enter:select a:avatar ",
            _ => " enter:confirm esc:cancel ",
        };

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
