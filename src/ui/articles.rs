//! News card list and the search box.

use crate::app::{App, Tab};
use crate::i18n::category_label;
use crate::news::Article;
use crate::util::{display_width, relative_time, truncate_to_width};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::borrow::Cow;

const BOOKMARK_MARKER: &str = "★ ";

/// Render the article list for the active tab.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let strings = app.strings();
    let palette = &app.palette;
    let articles = app.visible_articles();

    let title = match app.tab {
        Tab::Bookmarks => format!(" {} ({}) ", strings.bookmarks, app.bookmarks.len()),
        Tab::Search => format!(" {} ", strings.search),
        Tab::Home | Tab::Settings => format!(" {} ", strings.latest_news),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.panel_border)
        .title(title);

    if articles.is_empty() {
        let msg = Paragraph::new(empty_message(app))
            .style(palette.empty_state)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let now = Utc::now();
    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| card(app, article, inner_width, now))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.card_selected);
    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// One card: title line, description line, meta line, spacer.
fn card<'a>(app: &App, article: &'a Article, width: usize, now: DateTime<Utc>) -> ListItem<'a> {
    let palette = &app.palette;
    let strings = app.strings();

    let mut title_spans = Vec::with_capacity(2);
    let mut title_width = width;
    if app.bookmarks.contains(&article.id) {
        title_spans.push(Span::styled(BOOKMARK_MARKER, palette.bookmark_marker));
        title_width = title_width.saturating_sub(display_width(BOOKMARK_MARKER));
    }
    title_spans.push(Span::styled(
        truncate_to_width(&article.title, title_width),
        palette.card_title,
    ));

    let description = Line::from(Span::styled(
        truncate_to_width(&article.description, width),
        palette.card_description,
    ));

    let mut meta = vec![Span::styled(
        category_label(strings, &article.category),
        palette.card_category,
    )];
    let mut meta_tail = Vec::with_capacity(2);
    if !article.source.is_empty() {
        meta_tail.push(Cow::Borrowed(article.source.as_str()));
    }
    let when = relative_time(&article.published_at, now);
    if !when.is_empty() {
        meta_tail.push(when);
    }
    for part in meta_tail {
        meta.push(Span::styled(format!(" · {}", part), palette.card_meta));
    }

    ListItem::new(vec![
        Line::from(title_spans),
        description,
        Line::from(meta),
        Line::from(""),
    ])
}

/// Placeholder text when the visible list is empty.
pub(super) fn empty_message(app: &App) -> Cow<'static, str> {
    let strings = app.strings();
    match app.tab {
        Tab::Bookmarks => Cow::Borrowed(strings.no_bookmarks),
        _ if app.refresh.is_loading() => Cow::Borrowed(strings.loading),
        _ if !app.search_query.is_empty() => {
            Cow::Owned(format!("{} \"{}\"", strings.no_results, app.search_query))
        }
        _ => Cow::Borrowed(strings.no_articles),
    }
}

/// Search input box on the Search tab.
pub fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let strings = app.strings();
    let palette = &app.palette;
    let border = if app.search_typing {
        palette.panel_border_focused
    } else {
        palette.panel_border
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let text = if app.search_query.is_empty() {
        Span::styled(strings.search_placeholder, palette.empty_state)
    } else {
        // Keep the tail of a long query visible.
        let query = app.search_query.as_str();
        let mut start = 0;
        while display_width(&query[start..]) >= inner_width {
            match query[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        Span::styled(query[start..].to_string(), palette.search_input)
    };
    let cursor_x = if app.search_query.is_empty() {
        0
    } else {
        display_width(&text.content)
    };

    let widget = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", strings.search)),
    );
    f.render_widget(widget, area);

    if app.search_typing && app.reader.is_none() && app.language_picker.is_none() && !app.show_help
    {
        f.set_cursor_position(Position::new(area.x + 1 + cursor_x as u16, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::Language;
    use tokio::sync::mpsc;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(None, Language::English, tx)
    }

    #[tokio::test]
    async fn test_empty_bookmarks_message() {
        let mut app = test_app();
        app.switch_tab(Tab::Bookmarks);
        assert_eq!(empty_message(&app), "No bookmarks yet");
    }

    #[tokio::test]
    async fn test_empty_search_names_query() {
        let mut app = test_app();
        app.switch_tab(Tab::Search);
        for c in "zzz".chars() {
            app.push_search_char(c);
        }
        assert!(app.visible_articles().is_empty());
        assert_eq!(empty_message(&app), "No results found for \"zzz\"");
    }

    #[tokio::test]
    async fn test_loading_placeholder_wins_on_home() {
        let mut app = test_app();
        app.refresh.begin();
        assert_eq!(empty_message(&app), "Loading news...");

        app.refresh.settle(app.refresh.generation());
        assert_eq!(empty_message(&app), "No articles found.");
    }
}
