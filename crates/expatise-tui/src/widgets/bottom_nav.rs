use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

/// Tab bar switching between the home and profile screens
pub struct BottomNavWidget;

impl BottomNavWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let tab = |label: &'static str, screen: Screen| {
            if app.screen == screen {
                Span::styled(
                    label,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(theme.grey))
            }
        };

        let line = Line::from(vec![
            tab(" 1 Home ", Screen::Home),
            Span::raw("    "),
            tab(" 2 Profile ", Screen::Profile),
        ]);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg1));

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
