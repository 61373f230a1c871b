//! Keyboard input dispatch.
//!
//! Overlays capture keys first (help, then the language picker), then search
//! typing, then the article detail, then the active tab.

use crate::app::{App, AppEvent, SettingsRow, Tab};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::{spawn_open_in_browser, spawn_refresh, spawn_summary};
use super::Action;

/// Lines moved by a page scroll in the article detail.
const READER_PAGE: isize = 10;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.language_picker.is_some() {
        return handle_picker_input(app, code, modifiers, event_tx);
    }

    if app.search_typing {
        return handle_search_input(app, code, modifiers);
    }

    if app.reader.is_some() {
        return handle_reader_input(app, code, modifiers, event_tx);
    }

    handle_tab_input(app, code, modifiers, event_tx)
}

/// Help overlay: j/k scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Language picker overlay.
fn handle_picker_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Global)
    {
        Some(KbAction::Quit) if modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::Select) => {
            if let Some(language) = app.confirm_language_picker() {
                change_language(app, language, event_tx);
            }
        }
        Some(KbAction::Back) | Some(KbAction::Quit) | Some(KbAction::LanguagePicker) => {
            app.language_picker = None;
        }
        _ => {}
    }
    Action::Continue
}

/// Typing into the search box. Only the Search context is consulted so
/// letters bound elsewhere still reach the query.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Search)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::ExitSearch) => app.clear_search(),
        Some(KbAction::CommitSearch) => app.search_typing = false,
        _ => match code {
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_search_char(c)
            }
            KeyCode::Backspace => app.pop_search_char(),
            _ => {}
        },
    }
    Action::Continue
}

/// Article detail overlay.
fn handle_reader_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Reader)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::Back) => app.close_reader(),
        Some(KbAction::ScrollDown) => app.scroll_reader(1),
        Some(KbAction::ScrollUp) => app.scroll_reader(-1),
        Some(KbAction::PageDown) => app.scroll_reader(READER_PAGE),
        Some(KbAction::PageUp) => app.scroll_reader(-READER_PAGE),
        Some(KbAction::ToggleBookmark) => {
            app.toggle_focused_bookmark();
        }
        Some(KbAction::OpenInBrowser) => spawn_open_in_browser(app, event_tx),
        Some(KbAction::Summarize) => {
            spawn_summary(app, event_tx);
        }
        Some(KbAction::CycleTheme) => cycle_theme(app),
        Some(KbAction::ShowHelp) => app.show_help = true,
        _ => {}
    }
    Action::Continue
}

/// The active tab: article lists or the settings rows.
fn handle_tab_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    let context = match app.tab {
        Tab::Settings => KbContext::Global,
        Tab::Home | Tab::Search | Tab::Bookmarks => KbContext::Feed,
    };
    let Some(action) = app.keybindings.action_for_key(code, modifiers, context) else {
        return Action::Continue;
    };

    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::NavDown => app.nav_down(),
        KbAction::NavUp => app.nav_up(),
        KbAction::Select => {
            if app.tab == Tab::Settings {
                activate_setting(app);
            } else {
                app.open_reader();
            }
        }
        KbAction::Back => {
            if !app.search_query.is_empty() {
                app.clear_search();
            } else {
                app.switch_tab(Tab::Home);
            }
        }
        KbAction::NextTab => app.switch_tab(app.tab.next()),
        KbAction::GoHome => app.switch_tab(Tab::Home),
        KbAction::GoSearch | KbAction::EnterSearch => app.switch_tab(Tab::Search),
        KbAction::GoBookmarks => app.switch_tab(Tab::Bookmarks),
        KbAction::GoSettings => app.switch_tab(Tab::Settings),
        KbAction::NextCategory | KbAction::PrevCategory => {
            let forward = action == KbAction::NextCategory;
            if matches!(app.tab, Tab::Home | Tab::Search) && app.cycle_category(forward) {
                spawn_refresh(app, event_tx);
            }
        }
        KbAction::Refresh => {
            spawn_refresh(app, event_tx);
        }
        KbAction::ToggleBookmark => {
            app.toggle_focused_bookmark();
        }
        KbAction::LanguagePicker => app.open_language_picker(),
        KbAction::OpenInBrowser => spawn_open_in_browser(app, event_tx),
        KbAction::CycleTheme => cycle_theme(app),
        KbAction::ShowHelp => app.show_help = true,
        KbAction::ExitSearch
        | KbAction::CommitSearch
        | KbAction::Summarize
        | KbAction::ScrollDown
        | KbAction::ScrollUp
        | KbAction::PageDown
        | KbAction::PageUp => {}
    }

    app.clamp_selection();
    Action::Continue
}

fn activate_setting(app: &mut App) {
    match SettingsRow::ALL.get(app.settings_selected) {
        Some(SettingsRow::Language) => app.open_language_picker(),
        Some(SettingsRow::Theme) => cycle_theme(app),
        None => {}
    }
}

fn change_language(
    app: &mut App,
    language: crate::news::Language,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    if app.set_language(language) {
        spawn_refresh(app, event_tx);
    }
}

fn cycle_theme(app: &mut App) {
    let name = app.cycle_theme();
    let label = app.strings().theme;
    app.notify(format!("{}: {}", label, name));
}
