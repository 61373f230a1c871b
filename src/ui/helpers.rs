//! Background task spawning shared by input handling and the event loop.

use crate::app::{App, AppEvent};
use crate::gemini::FetchError;
use crate::util::validate_article_url;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Shown when the focused article has no link.
pub(super) const ERR_ARTICLE_NO_URL: &str = "Article has no URL";

/// Wraps a future to catch panics and convert them to errors.
///
/// A panic inside a spawned task would otherwise vanish into the runtime and
/// leave the UI waiting for an event that never comes. The panic payload is
/// returned as `Err(message)`.
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Start a news fetch for the current language and category.
///
/// Returns `false` when nothing was started (no credential). The previous
/// fetch task is aborted; its generation is superseded either way.
pub(super) fn spawn_refresh(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(ticket) = app.begin_refresh() else {
        tracing::debug!("No credential configured, refresh skipped");
        return false;
    };

    if let Some(handle) = app.fetch_handle.take() {
        handle.abort();
        tracing::debug!("Aborted previous news fetch");
    }

    let generation = ticket.generation;
    let tx = event_tx.clone();

    app.fetch_handle = Some(tokio::spawn(async move {
        let result = match catch_task_panic(ticket.fetch()).await {
            Ok(result) => result,
            Err(panic_msg) => {
                tracing::error!(task = "news_fetch", generation, error = %panic_msg, "Background task panicked");
                Err(FetchError::Panicked(panic_msg))
            }
        };

        if let Err(e) = tx.send(AppEvent::NewsFetched { generation, result }).await {
            tracing::warn!(error = %e, event = "NewsFetched", "Channel send failed (receiver dropped)");
        }
    }));
    true
}

/// Start a summary of the article open in the detail view.
///
/// Returns `false` when nothing was started. The reader shows the outcome.
pub(super) fn spawn_summary(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(ticket) = app.begin_summary() else {
        return false;
    };

    if let Some(handle) = app.summary_handle.take() {
        handle.abort();
    }

    let article_id = ticket.article.id.clone();
    let tx = event_tx.clone();

    app.summary_handle = Some(tokio::spawn(async move {
        let result = match catch_task_panic(ticket.summarize()).await {
            Ok(result) => result,
            Err(panic_msg) => {
                tracing::error!(task = "summary", error = %panic_msg, "Background task panicked");
                Err(FetchError::Panicked(panic_msg))
            }
        };

        if let Err(e) = tx.send(AppEvent::SummaryReady { article_id, result }).await {
            tracing::warn!(error = %e, event = "SummaryReady", "Channel send failed (receiver dropped)");
        }
    }));
    true
}

/// Open the focused article's link in the system browser.
///
/// The link is validated first; `open` blocks on some platforms, so the
/// launch runs on the blocking pool and reports failure back as an event.
pub(super) fn spawn_open_in_browser(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let Some(link) = app.focused_article().map(|a| a.url.clone()) else {
        return;
    };
    if link.trim().is_empty() {
        app.notify(ERR_ARTICLE_NO_URL);
        return;
    }
    let url = match validate_article_url(&link) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!(url = %link, error = %e, "Refusing to open article link");
            app.notify(e.to_string());
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let target = url.clone();
        let outcome = catch_task_panic(async move {
            tokio::task::spawn_blocking(move || open::that(&target)).await
        })
        .await;

        let event = match outcome {
            Ok(Ok(Ok(()))) => {
                tracing::debug!(url = %url, "Opened article in browser");
                return;
            }
            Ok(Ok(Err(e))) => AppEvent::OpenFailed {
                url,
                error: e.to_string(),
            },
            Ok(Err(join_err)) => AppEvent::OpenFailed {
                url,
                error: join_err.to_string(),
            },
            Err(panic_msg) => {
                tracing::error!(task = "open_browser", error = %panic_msg, "Background task panicked");
                AppEvent::TaskPanicked {
                    task: "open_browser",
                    error: panic_msg,
                }
            }
        };

        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Channel send failed (receiver dropped)");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SummaryState;
    use crate::news::Language;

    #[tokio::test]
    async fn test_catch_task_panic_passes_value_through() {
        assert_eq!(catch_task_panic(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_catch_task_panic_captures_message() {
        let result: Result<(), String> = catch_task_panic(async { panic!("boom") }).await;
        assert_eq!(result, Err("boom".to_string()));

        let owned: Result<(), String> =
            catch_task_panic(async { panic!("{} {}", "formatted", 1) }).await;
        assert_eq!(owned, Err("formatted 1".to_string()));
    }

    #[tokio::test]
    async fn test_spawn_refresh_without_credential() {
        let (expiry_tx, _expiry_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut app = App::new(None, Language::English, expiry_tx);

        assert!(!spawn_refresh(&mut app, &event_tx));
        assert!(app.fetch_handle.is_none());
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_spawn_summary_offline_marks_failed() {
        let (expiry_tx, _expiry_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut app = App::new(None, Language::English, expiry_tx);
        app.open_reader();

        assert!(!spawn_summary(&mut app, &event_tx));
        assert!(app.summary_handle.is_none());
        assert_eq!(
            app.reader.as_ref().map(|r| r.summary.clone()),
            Some(SummaryState::Failed)
        );
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_open_rejects_private_link() {
        let (expiry_tx, _expiry_rx) = mpsc::unbounded_channel();
        let (event_tx, _event_rx) = mpsc::channel(4);
        let mut app = App::new(None, Language::English, expiry_tx);
        let mut article = app.store.articles()[0].clone();
        article.url = "http://192.168.0.10/admin".to_string();
        app.store
            .replace(vec![article], crate::news::Provenance::Fallback);

        spawn_open_in_browser(&mut app, &event_tx);
        let msg = app.notifier.current().unwrap_or_default();
        assert!(msg.contains("Private IP"), "unexpected notification {msg:?}");
    }

    #[tokio::test]
    async fn test_open_without_link_notifies() {
        let (expiry_tx, _expiry_rx) = mpsc::unbounded_channel();
        let (event_tx, _event_rx) = mpsc::channel(4);
        let mut app = App::new(None, Language::English, expiry_tx);
        let mut article = app.store.articles()[0].clone();
        article.url.clear();
        app.store
            .replace(vec![article], crate::news::Provenance::Fallback);

        spawn_open_in_browser(&mut app, &event_tx);
        assert_eq!(app.notifier.current(), Some(ERR_ARTICLE_NO_URL));
    }
}
