//! Settings tab: language and theme rows plus an about panel.

use crate::app::{App, SettingsRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let strings = app.strings();
    let palette = &app.palette;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SettingsRow::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .map(|row| {
            let (label, value) = match row {
                SettingsRow::Language => (strings.language, app.language.native_name()),
                SettingsRow::Theme => (strings.theme, app.theme_variant.name()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<12}", label), palette.card_title),
                Span::styled(value, palette.card_category),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.panel_border_focused)
                .title(format!(" {} ", strings.settings)),
        )
        .highlight_style(palette.card_selected);
    let mut state = ListState::default().with_selected(Some(app.settings_selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let mode = if app.is_live() {
        strings.live_mode
    } else {
        strings.offline_mode
    };
    let mut about = vec![
        Line::from(Span::styled(
            format!("{} {}", strings.app_name, env!("CARGO_PKG_VERSION")),
            palette.reader_heading,
        )),
        Line::from(Span::styled(mode, palette.reader_metadata)),
    ];
    if let Some(client) = &app.client {
        about.push(Line::from(Span::styled(
            client.model().to_string(),
            palette.reader_metadata,
        )));
    }

    let panel = Paragraph::new(about).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.panel_border)
            .title(format!(" {} ", strings.about)),
    );
    f.render_widget(panel, chunks[1]);
}
