//! Toast line and bottom tab bar.

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use std::borrow::Cow;

/// The live notification, or a key hint for the current mode.
pub fn render_status(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    if let Some(message) = app.notifier.current() {
        let toast = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", message),
            app.palette.toast,
        )))
        .alignment(Alignment::Center);
        f.render_widget(toast, area);
        return;
    }

    let hint: Cow<'static, str> = if app.search_typing {
        Cow::Borrowed("Type to search | Esc clear | Enter done")
    } else if app.reader.is_some() {
        Cow::Borrowed("[j/k]scroll [s]ummarize [b]ookmark [o]pen [Esc]back")
    } else {
        match app.tab {
            Tab::Settings => Cow::Borrowed("[Enter]change [Tab]next tab [?]help [q]uit"),
            _ => Cow::Borrowed(
                "[h/l]category [/]search [b]ookmark [g]language [r]efresh [?]help [q]uit",
            ),
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, app.palette.card_meta)),
        area,
    );
}

/// Bottom tab bar: Home, Search, Bookmarks, Settings.
pub fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let strings = app.strings();
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title(strings))))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.palette.tab_inactive)
        .highlight_style(app.palette.tab_active)
        .divider("│");
    f.render_widget(tabs, area);
}
