//! Keybinding registry: maps key events to actions, per context, with
//! overrides from the `[keybindings]` table in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    Select,
    Back,
    NextTab,
    GoHome,
    GoSearch,
    GoBookmarks,
    GoSettings,
    NextCategory,
    PrevCategory,
    Refresh,
    ToggleBookmark,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    LanguagePicker,
    OpenInBrowser,
    Summarize,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::Select => "Open article / choose",
            Self::Back => "Go back / dismiss",
            Self::NextTab => "Next tab",
            Self::GoHome => "Home tab",
            Self::GoSearch => "Search tab",
            Self::GoBookmarks => "Bookmarks tab",
            Self::GoSettings => "Settings tab",
            Self::NextCategory => "Next category",
            Self::PrevCategory => "Previous category",
            Self::Refresh => "Refresh news",
            Self::ToggleBookmark => "Toggle bookmark",
            Self::EnterSearch => "Type a search query",
            Self::ExitSearch => "Clear search and stop typing",
            Self::CommitSearch => "Stop typing, keep query",
            Self::LanguagePicker => "Choose language",
            Self::OpenInBrowser => "Open in browser",
            Self::Summarize => "Summarize article",
            Self::ScrollDown => "Scroll down one line",
            Self::ScrollUp => "Scroll up one line",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::CycleTheme => "Toggle dark/light theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context; determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    /// Home, Search and Bookmarks article lists.
    Feed,
    Reader,
    /// Typing into the search box. Does not fall back to Global.
    Search,
}

impl Context {
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Feed => "Article list",
            Self::Reader => "Article detail",
            Self::Search => "Search input",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Left", "Right",
///   "Backspace", "Space"
/// - Modifier combos: "Ctrl+d"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    };
    if let Some(code) = named {
        return Some(KeySpec::plain(code));
    }

    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|rest| rest.parse::<u8>().ok())
    {
        return (1..=12).contains(&n).then(|| KeySpec::plain(KeyCode::F(n)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::char(c)),
        _ => None,
    }
}

/// Format a KeySpec for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

const DEFAULT_BINDINGS: &[(Context, KeySpec, Action)] = &[
    // Global
    (Context::Global, KeySpec::char('q'), Action::Quit),
    (Context::Global, KeySpec::ctrl('c'), Action::Quit),
    (Context::Global, KeySpec::char('j'), Action::NavDown),
    (Context::Global, KeySpec::plain(KeyCode::Down), Action::NavDown),
    (Context::Global, KeySpec::char('k'), Action::NavUp),
    (Context::Global, KeySpec::plain(KeyCode::Up), Action::NavUp),
    (Context::Global, KeySpec::plain(KeyCode::Enter), Action::Select),
    (Context::Global, KeySpec::plain(KeyCode::Esc), Action::Back),
    (Context::Global, KeySpec::plain(KeyCode::Tab), Action::NextTab),
    (Context::Global, KeySpec::char('1'), Action::GoHome),
    (Context::Global, KeySpec::char('2'), Action::GoSearch),
    (Context::Global, KeySpec::char('3'), Action::GoBookmarks),
    (Context::Global, KeySpec::char('4'), Action::GoSettings),
    (Context::Global, KeySpec::char('g'), Action::LanguagePicker),
    (Context::Global, KeySpec::char('r'), Action::Refresh),
    (Context::Global, KeySpec::char('t'), Action::CycleTheme),
    (Context::Global, KeySpec::char('?'), Action::ShowHelp),
    // Article lists
    (Context::Feed, KeySpec::char('l'), Action::NextCategory),
    (Context::Feed, KeySpec::plain(KeyCode::Right), Action::NextCategory),
    (Context::Feed, KeySpec::char('h'), Action::PrevCategory),
    (Context::Feed, KeySpec::plain(KeyCode::Left), Action::PrevCategory),
    (Context::Feed, KeySpec::char('b'), Action::ToggleBookmark),
    (Context::Feed, KeySpec::char('o'), Action::OpenInBrowser),
    (Context::Feed, KeySpec::char('/'), Action::EnterSearch),
    // Article detail
    (Context::Reader, KeySpec::char('j'), Action::ScrollDown),
    (Context::Reader, KeySpec::plain(KeyCode::Down), Action::ScrollDown),
    (Context::Reader, KeySpec::char('k'), Action::ScrollUp),
    (Context::Reader, KeySpec::plain(KeyCode::Up), Action::ScrollUp),
    (Context::Reader, KeySpec::ctrl('d'), Action::PageDown),
    (Context::Reader, KeySpec::char(' '), Action::PageDown),
    (Context::Reader, KeySpec::ctrl('u'), Action::PageUp),
    (Context::Reader, KeySpec::char('h'), Action::Back),
    (Context::Reader, KeySpec::char('b'), Action::ToggleBookmark),
    (Context::Reader, KeySpec::char('o'), Action::OpenInBrowser),
    (Context::Reader, KeySpec::char('s'), Action::Summarize),
    // Search input
    (Context::Search, KeySpec::plain(KeyCode::Esc), Action::ExitSearch),
    (Context::Search, KeySpec::plain(KeyCode::Enter), Action::CommitSearch),
    (Context::Search, KeySpec::plain(KeyCode::Down), Action::CommitSearch),
    (Context::Search, KeySpec::ctrl('c'), Action::Quit),
];

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts.
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// In registration order, for the help screen.
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::with_capacity(DEFAULT_BINDINGS.len()),
        };
        for &(context, key, action) in DEFAULT_BINDINGS {
            registry.bind(context, key, action);
        }
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        if let Some(previous) = self.lookup.insert((context, key), action) {
            self.bindings
                .retain(|&(c, k, a)| !(c == context && k == key && a == previous));
        }
        self.bindings.push((context, key, action));
    }

    /// Apply user overrides from the config keybindings map.
    ///
    /// Keys in the map are action names ("quit", "toggle_bookmark"), values
    /// are key strings ("q", "Ctrl+d", "F5"). The new key replaces every
    /// default key of that action, in every context the action was bound in.
    ///
    /// Returns a warning per unrecognised action name or unparseable key.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };
            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            let mut contexts: Vec<Context> = Vec::new();
            for &(c, _, a) in &self.bindings {
                if a == action && !contexts.contains(&c) {
                    contexts.push(c);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|&(_, _, a)| a != action);
            for context in contexts {
                self.bind(context, key, action);
            }

            tracing::info!(action = %action_name, key = %key_str, "Applied keybinding override");
        }

        warnings
    }

    /// Look up the action for a key in a context.
    ///
    /// Tries the specific context first, then Global. Search input never
    /// falls back, so typed characters reach the query.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }
        match context {
            Context::Global | Context::Search => None,
            _ => self.lookup.get(&(Context::Global, key)).copied(),
        }
    }

    /// All bindings for the help screen: (context, key label, description).
    pub fn all_bindings(&self) -> Vec<(Context, String, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name from config.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "down" => Some(Action::NavDown),
        "nav_up" | "up" => Some(Action::NavUp),
        "select" | "open_article" => Some(Action::Select),
        "back" => Some(Action::Back),
        "next_tab" | "tab" => Some(Action::NextTab),
        "home" | "go_home" => Some(Action::GoHome),
        "search_tab" | "go_search" => Some(Action::GoSearch),
        "bookmarks" | "go_bookmarks" => Some(Action::GoBookmarks),
        "settings" | "go_settings" => Some(Action::GoSettings),
        "next_category" => Some(Action::NextCategory),
        "prev_category" | "previous_category" => Some(Action::PrevCategory),
        "refresh" => Some(Action::Refresh),
        "toggle_bookmark" | "bookmark" => Some(Action::ToggleBookmark),
        "enter_search" | "search" => Some(Action::EnterSearch),
        "exit_search" => Some(Action::ExitSearch),
        "commit_search" => Some(Action::CommitSearch),
        "language" | "language_picker" => Some(Action::LanguagePicker),
        "open_in_browser" | "open" => Some(Action::OpenInBrowser),
        "summarize" | "summary" => Some(Action::Summarize),
        "scroll_down" => Some(Action::ScrollDown),
        "scroll_up" => Some(Action::ScrollUp),
        "page_down" => Some(Action::PageDown),
        "page_up" => Some(Action::PageUp),
        "cycle_theme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(reg: &KeybindingRegistry, key: KeySpec, context: Context) -> Option<Action> {
        reg.action_for_key(key.code, key.modifiers, context)
    }

    #[test]
    fn test_default_registry_has_quit() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('q'), Context::Global), Some(Action::Quit));
    }

    #[test]
    fn test_feed_context_falls_back_to_global() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('j'), Context::Feed), Some(Action::NavDown));
        assert_eq!(lookup(&reg, KeySpec::char('r'), Context::Feed), Some(Action::Refresh));
        assert_eq!(
            lookup(&reg, KeySpec::plain(KeyCode::Right), Context::Feed),
            Some(Action::NextCategory)
        );
    }

    #[test]
    fn test_reader_context_overrides_global() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('j'), Context::Reader), Some(Action::ScrollDown));
        assert_eq!(lookup(&reg, KeySpec::ctrl('d'), Context::Reader), Some(Action::PageDown));
        assert_eq!(
            lookup(&reg, KeySpec::plain(KeyCode::Esc), Context::Reader),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_search_context_does_not_swallow_text() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('q'), Context::Search), None);
        assert_eq!(lookup(&reg, KeySpec::char('j'), Context::Search), None);
        assert_eq!(
            lookup(&reg, KeySpec::plain(KeyCode::Esc), Context::Search),
            Some(Action::ExitSearch)
        );
        assert_eq!(lookup(&reg, KeySpec::ctrl('c'), Context::Search), Some(Action::Quit));
    }

    #[test]
    fn test_summarize_only_in_reader() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('s'), Context::Reader), Some(Action::Summarize));
        assert_eq!(lookup(&reg, KeySpec::char('s'), Context::Feed), None);
    }

    #[test]
    fn test_category_keys_only_in_feed() {
        let reg = KeybindingRegistry::new();
        assert_eq!(lookup(&reg, KeySpec::char('l'), Context::Global), None);
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = KeybindingRegistry::new();
        let overrides = HashMap::from([("quit".to_string(), "Ctrl+q".to_string())]);

        assert!(reg.apply_overrides(&overrides).is_empty());
        assert_eq!(lookup(&reg, KeySpec::char('q'), Context::Global), None);
        assert_eq!(lookup(&reg, KeySpec::ctrl('c'), Context::Global), None);
        assert_eq!(lookup(&reg, KeySpec::ctrl('q'), Context::Global), Some(Action::Quit));
        // Quit was also bound in Search input.
        assert_eq!(lookup(&reg, KeySpec::ctrl('q'), Context::Search), Some(Action::Quit));
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = KeybindingRegistry::new();
        let overrides = HashMap::from([("bookmark".to_string(), "s".to_string())]);
        assert!(reg.apply_overrides(&overrides).is_empty());

        assert_eq!(lookup(&reg, KeySpec::char('s'), Context::Feed), Some(Action::ToggleBookmark));
        assert_eq!(
            lookup(&reg, KeySpec::char('s'), Context::Reader),
            Some(Action::ToggleBookmark)
        );
        assert_eq!(lookup(&reg, KeySpec::char('b'), Context::Feed), None);
    }

    #[test]
    fn test_apply_overrides_warnings() {
        let mut reg = KeybindingRegistry::new();
        let overrides = HashMap::from([
            ("nonexistent_action".to_string(), "q".to_string()),
            ("refresh".to_string(), "NotAKey".to_string()),
        ]);
        let mut warnings = reg.apply_overrides(&overrides);
        warnings.sort();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Cannot parse key"));
        assert!(warnings[1].contains("Unknown action"));
        // Failed override leaves the default in place.
        assert_eq!(lookup(&reg, KeySpec::char('r'), Context::Global), Some(Action::Refresh));
    }

    #[test]
    fn test_parse_key_string() {
        assert_eq!(parse_key_string("Enter"), Some(KeySpec::plain(KeyCode::Enter)));
        assert_eq!(parse_key_string(" esc "), Some(KeySpec::plain(KeyCode::Esc)));
        assert_eq!(parse_key_string("space"), Some(KeySpec::char(' ')));
        assert_eq!(parse_key_string("F5"), Some(KeySpec::plain(KeyCode::F(5))));
        assert_eq!(parse_key_string("F13"), None);
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("Ctrl+dd"), None);
        assert_eq!(parse_key_string("/"), Some(KeySpec::char('/')));
        assert_eq!(parse_key_string("F"), Some(KeySpec::char('F')));
        assert_eq!(parse_key_string("é"), Some(KeySpec::char('é')));
        assert_eq!(parse_key_string(""), None);
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key(&KeySpec::char('q')), "q");
        assert_eq!(format_key(&KeySpec::char(' ')), "Space");
        assert_eq!(format_key(&KeySpec::ctrl('d')), "Ctrl+d");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::F(5))), "F5");
    }

    #[test]
    fn test_all_bindings_cover_defaults() {
        let reg = KeybindingRegistry::new();
        assert_eq!(reg.all_bindings().len(), DEFAULT_BINDINGS.len());
    }
}
