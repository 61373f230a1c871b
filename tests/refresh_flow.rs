//! Integration tests for the news refresh flow: `App` issues request
//! generations, a `GeminiClient` pointed at a wiremock server answers them,
//! and completions are applied in arrival order.

use nexara::app::App;
use nexara::gemini::GeminiClient;
use nexara::news::{Category, CategoryFilter, Language, Provenance};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn envelope(articles: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": articles.to_string() }] }
        }]
    })
}

fn headlines(category: &str, titles: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        titles
            .iter()
            .map(|t| {
                serde_json::json!({
                    "title": t,
                    "description": format!("About {}", t),
                    "url": format!("https://example.com/{}", t.replace(' ', "-")),
                    "source": "Wire",
                    "category": category,
                })
            })
            .collect(),
    )
}

fn live_app(server: &MockServer) -> (App, mpsc::UnboundedReceiver<u64>) {
    let client = GeminiClient::new(
        reqwest::Client::new(),
        SecretString::from("test-key"),
        "gemini-test",
        &server.uri(),
        8,
    )
    .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(Some(Arc::new(client)), Language::English, tx), rx)
}

fn titles(app: &App) -> Vec<String> {
    app.store.articles().iter().map(|a| a.title.clone()).collect()
}

#[tokio::test]
async fn test_successful_refresh_replaces_sample_articles() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_string_contains("General"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(headlines("General", &["Budget passed", "Rates hold"]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);
    let ticket = app.begin_refresh().unwrap();
    assert_eq!(ticket.category, Category::General);
    let generation = ticket.generation;

    let result = ticket.fetch().await;
    assert!(app.complete_refresh(generation, result));

    assert_eq!(app.store.provenance(), Provenance::Remote);
    assert_eq!(titles(&app), vec!["Budget passed", "Rates hold"]);
    assert!(!app.refresh.is_loading());
    assert_eq!(app.notifier.current(), None);
}

#[tokio::test]
async fn test_last_request_wins_even_when_answered_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Sports"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(headlines("Sports", &["Old sports story"])))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("Health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(headlines("Health", &["Fresh health story"]))),
        )
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);

    app.select_category(CategoryFilter::Only(Category::Sports));
    let stale = app.begin_refresh().unwrap();
    app.select_category(CategoryFilter::Only(Category::Health));
    let latest = app.begin_refresh().unwrap();
    let (stale_gen, latest_gen) = (stale.generation, latest.generation);

    let (stale_result, latest_result) = tokio::join!(stale.fetch(), latest.fetch());

    // The latest answer lands first, the slow superseded one after it.
    assert!(app.complete_refresh(latest_gen, latest_result));
    assert!(!app.complete_refresh(stale_gen, stale_result));

    assert_eq!(titles(&app), vec!["Fresh health story"]);
    assert!(!app.refresh.is_loading());
}

#[tokio::test]
async fn test_superseded_answer_arriving_first_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(headlines("General", &["Some story"]))),
        )
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);
    let first = app.begin_refresh().unwrap();
    let second = app.begin_refresh().unwrap();
    let (first_gen, second_gen) = (first.generation, second.generation);

    let first_result = first.fetch().await;
    assert!(!app.complete_refresh(first_gen, first_result));
    // Still waiting on the latest request.
    assert!(app.refresh.is_loading());
    assert_eq!(app.store.provenance(), Provenance::Fallback);

    let second_result = second.fetch().await;
    assert!(app.complete_refresh(second_gen, second_result));
    assert_eq!(app.store.provenance(), Provenance::Remote);
}

#[tokio::test]
async fn test_server_error_keeps_store_and_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);
    let before = titles(&app);
    let ticket = app.begin_refresh().unwrap();
    let generation = ticket.generation;
    let result = ticket.fetch().await;
    assert!(result.is_err());

    assert!(app.complete_refresh(generation, result));
    assert_eq!(titles(&app), before);
    assert_eq!(app.store.provenance(), Provenance::Fallback);
    assert_eq!(
        app.notifier.current(),
        Some("Failed to update news. Using cached.")
    );
    assert_eq!(app.notifier.generation(), 1);
}

#[tokio::test]
async fn test_empty_answer_keeps_store_and_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))))
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);
    let before = titles(&app);
    let ticket = app.begin_refresh().unwrap();
    let generation = ticket.generation;
    let result = ticket.fetch().await;
    assert_eq!(result.as_ref().map(Vec::len).ok(), Some(0));

    assert!(app.complete_refresh(generation, result));
    assert_eq!(titles(&app), before);
    assert_eq!(app.notifier.generation(), 1);
}

#[tokio::test]
async fn test_bookmark_survives_refresh_of_same_article() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(headlines("General", &["Same story", "Other"]))),
        )
        .mount(&server)
        .await;

    let (mut app, _rx) = live_app(&server);
    let ticket = app.begin_refresh().unwrap();
    let generation = ticket.generation;
    let result = ticket.fetch().await;
    app.complete_refresh(generation, result);
    let id = app.store.articles()[0].id.clone();
    app.toggle_bookmark(&id);

    // A later refresh returning the same story keeps it bookmarked.
    let ticket = app.begin_refresh().unwrap();
    let generation = ticket.generation;
    let result = ticket.fetch().await;
    app.complete_refresh(generation, result);
    assert_eq!(app.store.articles()[0].id, id);
    assert!(app.bookmarks.contains(&id));
}

#[tokio::test]
async fn test_no_credential_never_issues_requests() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = App::new(None, Language::English, tx);
    assert!(app.begin_refresh().is_none());
    assert_eq!(app.refresh.generation(), 0);
    assert_eq!(app.store.provenance(), Provenance::Fallback);
}
