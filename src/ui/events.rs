//! Handling of events sent back by background tasks.

use crate::app::{App, AppEvent};

/// Apply a background task result to the application state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::NewsFetched { generation, result } => {
            let count = result.as_ref().map(Vec::len).ok();
            if app.complete_refresh(generation, result) {
                tracing::info!(generation, articles = ?count, "News refresh settled");
            } else {
                tracing::debug!(
                    generation,
                    latest = app.refresh.generation(),
                    "Discarding superseded news fetch"
                );
            }
        }
        AppEvent::SummaryReady { article_id, result } => {
            if !app.complete_summary(&article_id, result) {
                tracing::debug!(id = %article_id, "Discarding summary for a closed article");
            }
        }
        AppEvent::OpenFailed { url, error } => {
            tracing::warn!(url = %url, error = %error, "Failed to open browser");
            app.notify(format!("Failed to open browser: {}", error));
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error = %error, "Background task panicked");
            app.notify(format!("Internal error in {}: {}", task, error));
        }
    }
}
