use crate::gemini::{FetchError, GeminiClient};
use crate::i18n::{self, UiStrings};
use crate::keybindings::KeybindingRegistry;
use crate::news::{
    bookmarked_articles, filter_articles, Article, ArticleStore, BookmarkChange, BookmarkSet,
    Category, CategoryFilter, Language, Provenance, RefreshState,
};
use crate::notify::Notifier;
use crate::theme::{ColorPalette, ThemeVariant};
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Maximum scroll offset for the article detail (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

/// Number of frames in the loading spinner animation.
pub const SPINNER_FRAMES: usize = 10;

// ============================================================================
// Tabs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Bookmarks,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Bookmarks, Tab::Settings];

    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Search,
            Self::Search => Self::Bookmarks,
            Self::Bookmarks => Self::Settings,
            Self::Settings => Self::Home,
        }
    }

    pub fn title(self, strings: &'static UiStrings) -> &'static str {
        match self {
            Self::Home => strings.home,
            Self::Search => strings.search,
            Self::Bookmarks => strings.bookmarks,
            Self::Settings => strings.settings,
        }
    }
}

/// Rows on the Settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Language,
    Theme,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 2] = [SettingsRow::Language, SettingsRow::Theme];
}

// ============================================================================
// Overlays
// ============================================================================

/// Article detail overlay.
///
/// Holds its own copy of the article so a store replacement while reading
/// does not pull the text out from under the user.
#[derive(Debug, Clone)]
pub struct ReaderState {
    pub article: Article,
    pub scroll: usize,
    pub summary: SummaryState,
}

/// Model-generated summary of the open article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Idle,
    Generating,
    Ready(String),
    Failed,
}

// ============================================================================
// Background events
// ============================================================================

/// Everything a background fetch needs, captured when the request is issued.
#[derive(Debug, Clone)]
pub struct RefreshTicket {
    pub generation: u64,
    pub language: Language,
    pub category: Category,
    client: Arc<GeminiClient>,
}

impl RefreshTicket {
    /// Perform the request this ticket describes.
    pub async fn fetch(self) -> Result<Vec<Article>, FetchError> {
        self.client
            .fetch_latest_news(self.language, self.category)
            .await
    }
}

/// A summary request for the article open in the detail view.
#[derive(Debug, Clone)]
pub struct SummaryTicket {
    pub article: Article,
    pub language: Language,
    client: Arc<GeminiClient>,
}

impl SummaryTicket {
    pub async fn summarize(self) -> Result<String, FetchError> {
        self.client.summarize(&self.article, self.language).await
    }
}

/// Events from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// A news fetch finished.
    ///
    /// `generation` is the request generation the fetch was issued with; only
    /// the latest one is applied.
    NewsFetched {
        generation: u64,
        result: Result<Vec<Article>, FetchError>,
    },
    /// A summary request finished for the article with `article_id`.
    SummaryReady {
        article_id: String,
        result: Result<String, FetchError>,
    },
    /// The system browser could not be launched.
    OpenFailed { url: String, error: String },
    /// A background task panicked.
    TaskPanicked { task: &'static str, error: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    /// `None` means no credential: the bundled sample articles are shown and
    /// refreshes are no-ops.
    pub client: Option<Arc<GeminiClient>>,
    pub language: Language,
    pub tab: Tab,

    pub store: ArticleStore,
    pub bookmarks: BookmarkSet,
    pub category: CategoryFilter,
    pub search_query: String,
    /// Keystrokes go to the search box.
    pub search_typing: bool,
    /// Index into the currently visible list.
    pub selected: usize,

    pub notifier: Notifier,
    pub refresh: RefreshState,
    /// Latest spawned fetch, aborted on drop.
    pub fetch_handle: Option<JoinHandle<()>>,
    /// Summary task for the open article, aborted when the reader closes.
    pub summary_handle: Option<JoinHandle<()>>,

    pub reader: Option<ReaderState>,
    /// Cursor in the language picker when it is open.
    pub language_picker: Option<usize>,
    pub settings_selected: usize,
    pub show_help: bool,
    pub help_scroll: usize,

    pub keybindings: KeybindingRegistry,
    pub theme_variant: ThemeVariant,
    pub palette: ColorPalette,

    pub needs_redraw: bool,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(
        client: Option<Arc<GeminiClient>>,
        language: Language,
        expiry_tx: mpsc::UnboundedSender<u64>,
    ) -> Self {
        Self {
            client,
            language,
            tab: Tab::Home,
            store: ArticleStore::fallback(),
            bookmarks: BookmarkSet::new(),
            category: CategoryFilter::All,
            search_query: String::new(),
            search_typing: false,
            selected: 0,
            notifier: Notifier::new(expiry_tx),
            refresh: RefreshState::new(),
            fetch_handle: None,
            summary_handle: None,
            reader: None,
            language_picker: None,
            settings_selected: 0,
            show_help: false,
            help_scroll: 0,
            keybindings: KeybindingRegistry::new(),
            theme_variant: ThemeVariant::Dark,
            palette: ThemeVariant::Dark.palette(),
            needs_redraw: true,
            spinner_frame: 0,
        }
    }

    pub fn strings(&self) -> &'static UiStrings {
        i18n::strings(self.language)
    }

    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.palette = variant.palette();
        self.needs_redraw = true;
    }

    /// Dark → Light → Dark. Returns the new theme's name.
    pub fn cycle_theme(&mut self) -> &'static str {
        self.set_theme(self.theme_variant.next());
        self.theme_variant.name()
    }

    /// Show a transient notification.
    pub fn notify(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.notifier.show(msg);
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------------
    // Derived lists
    // ------------------------------------------------------------------------

    /// The article list for the active tab, in store order.
    pub fn visible_articles(&self) -> Vec<&Article> {
        match self.tab {
            Tab::Home | Tab::Search => {
                filter_articles(&self.store, self.category, &self.search_query)
            }
            Tab::Bookmarks => bookmarked_articles(&self.store, &self.bookmarks),
            Tab::Settings => Vec::new(),
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.visible_articles().get(self.selected).copied()
    }

    /// The article an action applies to: the open detail view, else the
    /// list selection.
    pub fn focused_article(&self) -> Option<&Article> {
        match &self.reader {
            Some(reader) => Some(&reader.article),
            None => self.selected_article(),
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = match self.tab {
            Tab::Settings => SettingsRow::ALL.len(),
            _ => self.visible_articles().len(),
        };
        if self.tab == Tab::Settings {
            self.settings_selected = self.settings_selected.min(len.saturating_sub(1));
        } else {
            self.selected = self.selected.min(len.saturating_sub(1));
        }
    }

    pub fn nav_up(&mut self) {
        if let Some(cursor) = self.language_picker.as_mut() {
            *cursor = cursor.saturating_sub(1);
        } else if self.tab == Tab::Settings {
            self.settings_selected = self.settings_selected.saturating_sub(1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    pub fn nav_down(&mut self) {
        if let Some(cursor) = self.language_picker.as_mut() {
            *cursor = (*cursor + 1).min(Language::ALL.len() - 1);
        } else if self.tab == Tab::Settings {
            self.settings_selected = (self.settings_selected + 1).min(SettingsRow::ALL.len() - 1);
        } else {
            let len = self.visible_articles().len();
            if len > 0 {
                self.selected = self.selected.saturating_add(1).min(len - 1);
            }
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(?tab, "Switching tab");
            self.tab = tab;
            self.selected = 0;
        }
        self.search_typing = tab == Tab::Search;
    }

    // ------------------------------------------------------------------------
    // Bookmarks
    // ------------------------------------------------------------------------

    /// Toggle the bookmark on `id` and announce the outcome.
    pub fn toggle_bookmark(&mut self, id: &str) -> BookmarkChange {
        let change = self.bookmarks.toggle(id);
        let strings = self.strings();
        self.notify(match change {
            BookmarkChange::Saved => strings.saved,
            BookmarkChange::Removed => strings.removed,
        });
        if self.tab == Tab::Bookmarks {
            self.clamp_selection();
        }
        change
    }

    /// Toggle the bookmark on the focused article, if any.
    pub fn toggle_focused_bookmark(&mut self) -> Option<BookmarkChange> {
        let id = self.focused_article()?.id.clone();
        Some(self.toggle_bookmark(&id))
    }

    // ------------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------------

    /// Returns whether the language changed, i.e. whether a refresh is due.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        tracing::info!(language = language.code(), "Language changed");
        self.language = language;
        true
    }

    /// Returns whether the category changed, i.e. whether a refresh is due.
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        tracing::debug!(?category, "Category changed");
        self.category = category;
        self.selected = 0;
        true
    }

    pub fn cycle_category(&mut self, forward: bool) -> bool {
        self.select_category(self.category.cycle(forward))
    }

    pub fn push_search_char(&mut self, c: char) {
        if self.search_query.chars().count() < crate::util::MAX_SEARCH_QUERY_LENGTH {
            self.search_query.push(c);
            self.selected = 0;
        }
    }

    pub fn pop_search_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.selected = 0;
        }
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_typing = false;
        self.selected = 0;
    }

    // ------------------------------------------------------------------------
    // Fetch orchestration
    // ------------------------------------------------------------------------

    /// Issue a new request generation for the current language and category.
    ///
    /// Returns `None` without touching any state when no credential is
    /// configured. `All` is requested as `General`.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        let client = Arc::clone(self.client.as_ref()?);
        let generation = self.refresh.begin();
        let category = self.category.request_category();
        tracing::debug!(
            generation,
            language = self.language.code(),
            category = category.as_str(),
            "Issuing news refresh"
        );
        self.needs_redraw = true;
        Some(RefreshTicket {
            generation,
            language: self.language,
            category,
            client,
        })
    }

    /// Apply a finished fetch.
    ///
    /// Completions of superseded requests are dropped without any effect.
    /// For the latest request, a non-empty result replaces the store and
    /// anything else keeps it and shows one failure notification. Returns
    /// whether the completion was applied.
    pub fn complete_refresh(
        &mut self,
        generation: u64,
        result: Result<Vec<Article>, FetchError>,
    ) -> bool {
        if !self.refresh.settle(generation) {
            return false;
        }
        self.needs_redraw = true;

        match result {
            Ok(articles) if !articles.is_empty() => {
                self.store.replace(articles, Provenance::Remote);
                self.clamp_selection();
            }
            Ok(_) => {
                tracing::warn!(generation, "News fetch returned no articles, keeping current list");
                self.notify(self.strings().update_failed);
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "News fetch failed, keeping current list");
                self.notify(self.strings().update_failed);
            }
        }
        true
    }

    // ------------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------------

    /// Open the detail view for the selected article.
    pub fn open_reader(&mut self) -> bool {
        let Some(article) = self.selected_article().cloned() else {
            return false;
        };
        tracing::debug!(id = %article.id, "Opening article");
        self.reader = Some(ReaderState {
            article,
            scroll: 0,
            summary: SummaryState::Idle,
        });
        true
    }

    pub fn close_reader(&mut self) {
        self.reader = None;
        if let Some(handle) = self.summary_handle.take() {
            handle.abort();
            tracing::debug!("Aborted summary task on reader close");
        }
    }

    /// Start a summary of the open article.
    ///
    /// Returns `None` when no article is open or a summary is already being
    /// generated. Without a credential the summary fails immediately.
    pub fn begin_summary(&mut self) -> Option<SummaryTicket> {
        let language = self.language;
        let client = self.client.clone();
        let reader = self.reader.as_mut()?;
        if reader.summary == SummaryState::Generating {
            return None;
        }
        self.needs_redraw = true;

        let Some(client) = client else {
            tracing::debug!("No credential configured, summary unavailable");
            reader.summary = SummaryState::Failed;
            return None;
        };
        reader.summary = SummaryState::Generating;
        Some(SummaryTicket {
            article: reader.article.clone(),
            language,
            client,
        })
    }

    /// Apply a finished summary. Ignored unless the same article is still
    /// open and waiting for it. Returns whether it was applied.
    pub fn complete_summary(
        &mut self,
        article_id: &str,
        result: Result<String, FetchError>,
    ) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };
        if reader.article.id != article_id || reader.summary != SummaryState::Generating {
            return false;
        }
        reader.summary = match result {
            Ok(text) => SummaryState::Ready(text),
            Err(e) => {
                tracing::warn!(id = %article_id, error = %e, "Summary generation failed");
                SummaryState::Failed
            }
        };
        self.needs_redraw = true;
        true
    }

    pub fn scroll_reader(&mut self, delta: isize) {
        if let Some(reader) = self.reader.as_mut() {
            reader.scroll = reader
                .scroll
                .saturating_add_signed(delta)
                .min(MAX_SCROLL);
        }
    }

    /// Clamp the detail scroll to the rendered content height.
    pub fn clamp_reader_scroll(&mut self, content_lines: usize, visible_lines: usize) {
        if let Some(reader) = self.reader.as_mut() {
            let max = content_lines.saturating_sub(visible_lines);
            reader.scroll = reader.scroll.min(max).min(MAX_SCROLL);
        }
    }

    pub fn open_language_picker(&mut self) {
        let cursor = Language::ALL
            .iter()
            .position(|&l| l == self.language)
            .unwrap_or(0);
        self.language_picker = Some(cursor);
    }

    /// Close the picker, returning the highlighted language.
    pub fn confirm_language_picker(&mut self) -> Option<Language> {
        let cursor = self.language_picker.take()?;
        Language::ALL.get(cursor).copied()
    }
}

// ============================================================================
// Resource Cleanup
// ============================================================================

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
            tracing::debug!("Aborted news fetch task on App drop");
        }
        if let Some(handle) = self.summary_handle.take() {
            handle.abort();
        }
    }
}
