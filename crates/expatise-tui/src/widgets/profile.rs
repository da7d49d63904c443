use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Mode, SettingsRow};

/// Profile screen: avatar, account details and the settings list
pub struct ProfileWidget;

impl ProfileWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let [account, _, settings] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area.inner(Margin::new(2, 1)));

        let [avatar, details] =
            Layout::horizontal([Constraint::Length(14), Constraint::Min(0)]).areas(account);

        Self::render_avatar(frame, avatar, app);
        Self::render_details(frame, details, app);
        Self::render_settings(frame, settings, app);
    }

    fn render_avatar(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let picking = matches!(app.mode, Mode::AvatarPath(_));

        let lines = match app.avatar.current() {
            Some(preview) => vec![
                Line::from(Span::styled(preview.file_name(), Style::default().fg(theme.fg0))),
                Line::from(Span::styled(
                    format!("{}x{}", preview.width, preview.height),
                    Style::default().fg(theme.grey),
                )),
            ],
            None => vec![
                Line::from(Span::styled(
                    initials(&app.config.profile.username),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled("a: upload", Style::default().fg(theme.grey))),
            ],
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if picking { theme.accent } else { theme.bg2 }))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }

    fn render_details(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let profile = &app.config.profile;

        let mut name = vec![Span::styled(
            profile.username.clone(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )];
        if profile.premium {
            name.push(Span::styled(" ♛", Style::default().fg(theme.crown)));
        }

        let mut lines = vec![
            Line::from(name),
            Line::from(Span::styled(profile.email.clone(), Style::default().fg(theme.fg1))),
        ];
        if profile.premium {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                " Premium Plan ",
                Style::default().fg(theme.bg0).bg(theme.crown),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines),
            area.inner(Margin::new(2, 0)),
        );
    }

    fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = SettingsRow::ALL
            .iter()
            .map(|row| {
                let label = row.label();
                let (trailing, trailing_style) = match row {
                    SettingsRow::ThemeToggle => {
                        if app.theme_mode().is_dark() {
                            ("[ ●]", Style::default().fg(theme.toggle_on))
                        } else {
                            ("[● ]", Style::default().fg(theme.toggle_off))
                        }
                    }
                    SettingsRow::Link(_) => ("›", Style::default().fg(theme.grey)),
                    SettingsRow::LogOut => ("", Style::default()),
                };
                let label_style = match row {
                    SettingsRow::LogOut => Style::default().fg(theme.error),
                    _ => Style::default().fg(theme.fg0),
                };
                let padding = width.saturating_sub(label.chars().count() + trailing.chars().count());
                ListItem::new(Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw(" ".repeat(padding)),
                    Span::styled(trailing, trailing_style),
                ]))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.bg2))
            .title(" Settings ")
            .title_style(Style::default().fg(theme.grey))
            .style(Style::default().bg(theme.bg1));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection));

        let mut state = ListState::default();
        state.select(Some(app.selected_setting));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Placeholder shown until an avatar is picked
fn initials(username: &str) -> String {
    username
        .trim_start_matches('@')
        .chars()
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
