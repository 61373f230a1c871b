//! Language picker overlay.

use crate::app::App;
use crate::news::Language;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

const PICKER_WIDTH: u16 = 36;

pub fn render(f: &mut Frame, app: &App) {
    let Some(cursor) = app.language_picker else {
        return;
    };
    let area = f.area();
    let height = (Language::ALL.len() as u16 + 2).min(area.height);
    let width = PICKER_WIDTH.min(area.width);
    let overlay = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let items: Vec<ListItem> = Language::ALL
        .iter()
        .map(|&language| {
            let marker = if language == app.language { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, app.palette.bookmark_marker),
                Span::raw(language.native_name()),
                Span::styled(
                    format!(" ({})", language.english_name()),
                    app.palette.card_meta,
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.panel_border_focused)
                .title(format!(" {} ", app.strings().language)),
        )
        .style(app.palette.reader_body)
        .highlight_style(app.palette.picker_selected);

    f.render_widget(Clear, overlay);
    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, overlay, &mut state);
}
