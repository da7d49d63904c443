use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::drag_row::{DragRow, CARD_HEIGHT};
use crate::app::{App, Mode};

/// Home screen: greeting, exam countdown and the draggable practice row
pub struct HomeWidget;

impl HomeWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let [header, countdown, section, row, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area.inner(Margin::new(2, 1)));

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                "Expatise",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Hi, {}", app.config.profile.username),
                Style::default().fg(theme.fg1),
            )),
        ]);
        frame.render_widget(greeting, header);

        let editing = matches!(app.mode, Mode::EditDate(_));
        let border_color = if editing { theme.accent } else { theme.bg2 };
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(" Test date ")
            .title_style(Style::default().fg(theme.grey))
            .style(Style::default().bg(theme.bg1));

        let countdown_text = Paragraph::new(vec![
            Line::from(Span::styled(
                app.countdown.formatted.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    app.countdown.days_label(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" left", Style::default().fg(theme.fg1)),
            ]),
        ])
        .block(card);
        frame.render_widget(countdown_text, countdown);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Practice",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))),
            section,
        );

        let cards = DragRow::new(&app.cards)
            .card_width(app.config.ui.card_width)
            .gap(2)
            .style(Style::default().fg(theme.fg1).bg(theme.bg0))
            .title_style(Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(theme.grey));
        frame.render_stateful_widget(cards, row, &mut app.row);
    }
}
