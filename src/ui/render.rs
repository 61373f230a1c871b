//! Render functions for the TUI.
//!
//! Screen layout, top to bottom: header, category strip (Home) or search box
//! (Search), the tab body, a status line for toasts, and the tab bar.
//! Overlays draw last.

use crate::app::{App, Tab, SPINNER_FRAMES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{articles, categories, help, language, reader, settings, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 12;

const SPINNER: [&str; SPINNER_FRAMES] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let strip_height = match app.tab {
        Tab::Home => 1,
        Tab::Search => 3,
        Tab::Bookmarks | Tab::Settings => 0,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(strip_height),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    match app.tab {
        Tab::Home => categories::render(f, app, chunks[1]),
        Tab::Search => articles::render_search_box(f, app, chunks[1]),
        Tab::Bookmarks | Tab::Settings => {}
    }
    match app.tab {
        Tab::Settings => settings::render(f, app, chunks[2]),
        Tab::Home | Tab::Search | Tab::Bookmarks => articles::render(f, app, chunks[2]),
    }
    status::render_status(f, app, chunks[3]);
    status::render_tabs(f, app, chunks[4]);

    if app.reader.is_some() {
        reader::render(f, app);
    }
    if app.language_picker.is_some() {
        language::render(f, app);
    }
    if app.show_help {
        help::render(f, app);
    }
}

/// App name with the loading spinner, then the live/offline subtitle.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let strings = app.strings();
    let palette = &app.palette;

    let mut title = vec![Span::styled(format!(" {} ", strings.app_name), palette.header_title)];
    if app.refresh.is_loading() {
        title.push(Span::styled(
            format!("{} {}", SPINNER[app.spinner_frame % SPINNER_FRAMES], strings.loading),
            palette.spinner,
        ));
    }

    let mode = if app.is_live() {
        strings.live_mode
    } else {
        strings.offline_mode
    };
    let subtitle = Line::from(Span::styled(
        format!(" {} · {}", mode, app.language.native_name()),
        palette.header_subtitle,
    ));

    f.render_widget(Paragraph::new(vec![Line::from(title), subtitle]), area);
}

/// Create a centered rectangle with the given percentage of the parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
