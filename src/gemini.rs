//! Gemini `generateContent` client that asks the model for a JSON list of
//! current headlines and turns the reply into [`Article`]s.

use futures::StreamExt;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::news::{stable_id, Article, Category, Language};
use crate::util::strip_control_chars;

const MAX_RESPONSE_SIZE: usize = 2 * 1024 * 1024; // 2MB
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out after 30s")]
    Timeout,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Invalid UTF-8 in response")]
    InvalidUtf8,
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
    #[error("Malformed model response: {0}")]
    Malformed(String),
    #[error("Request blocked by the model: {0}")]
    Blocked(String),
    #[error("Fetch task panicked: {0}")]
    Panicked(String),
}

/// Client for the news-generating model.
///
/// Cheap to share behind an `Arc`; every call is independent.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
    article_count: u32,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("article_count", &self.article_count)
            .finish()
    }
}

impl GeminiClient {
    /// Build a client. Rejects plain-HTTP base URLs unless they point at
    /// localhost, so the key never leaves the machine unencrypted.
    pub fn new(
        http: reqwest::Client,
        api_key: SecretString,
        model: impl Into<String>,
        base_url: &str,
        article_count: u32,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/');
        if !base_url.starts_with("https://") {
            let is_localhost = base_url.starts_with("http://127.0.0.1")
                || base_url.starts_with("http://localhost");
            if !is_localhost {
                tracing::error!(base_url = %base_url, "Rejecting non-HTTPS base URL (HTTPS required except for localhost)");
                return Err(FetchError::InsecureBaseUrl);
            }
            tracing::warn!(base_url = %base_url, "Using non-HTTPS Gemini base URL (localhost only)");
        }

        Ok(Self {
            http,
            api_key,
            model: model.into(),
            base_url: base_url.to_string(),
            article_count,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model for the latest headlines in `language` and `category`.
    ///
    /// Drafts without a title are dropped. An `Ok(vec![])` is possible when the
    /// model answers with an empty list.
    pub async fn fetch_latest_news(
        &self,
        language: Language,
        category: Category,
    ) -> Result<Vec<Article>, FetchError> {
        tracing::info!(
            language = language.code(),
            category = category.as_str(),
            model = %self.model,
            "Requesting news from Gemini"
        );

        let prompt = build_prompt(language, category, self.article_count);
        let text = self.generate(&prompt, ResponseFormat::Json).await?;
        let articles = parse_articles(&text, language, category)?;
        tracing::info!(count = articles.len(), "Received news from Gemini");
        Ok(articles)
    }

    /// Ask the model for a short plain-text summary of `article` in `language`.
    pub async fn summarize(
        &self,
        article: &Article,
        language: Language,
    ) -> Result<String, FetchError> {
        tracing::info!(id = %article.id, language = language.code(), "Requesting article summary");

        let text = self
            .generate(&build_summary_prompt(article, language), ResponseFormat::Text)
            .await?;
        let summary = clean(strip_code_fence(&text));
        if summary.is_empty() {
            return Err(FetchError::Malformed("empty summary".to_string()));
        }
        Ok(summary)
    }

    /// One `generateContent` round trip, returning the first candidate's text.
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String, FetchError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .body(request_body(prompt, format).to_string());

        let response = tokio::time::timeout(REQUEST_TIMEOUT, request.send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let body = read_limited_text(response, MAX_RESPONSE_SIZE).await?;
        candidate_text(&body)
    }
}

#[derive(Debug, Clone, Copy)]
enum ResponseFormat {
    Json,
    Text,
}

impl ResponseFormat {
    fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }
}

fn build_prompt(language: Language, category: Category, count: u32) -> String {
    format!(
        "Generate {count} realistic, current news articles in the \"{category}\" category. \
         Write every text field in {language} ({native}). \
         Respond with a JSON array only. Each element must be an object with the string fields \
         \"title\", \"description\" (one or two sentences), \"content\" (three short paragraphs \
         separated by blank lines), \"author\", \"source\", \"url\", \"publishedAt\" (RFC 3339) \
         and \"category\" (set to \"{category}\").",
        category = category.as_str(),
        language = language.english_name(),
        native = language.native_name(),
    )
}

fn build_summary_prompt(article: &Article, language: Language) -> String {
    format!(
        "Summarize the following news article in {language} ({native}) in two or three \
         sentences. Reply with the summary text only.\n\nTitle: {title}\n\n{body}",
        language = language.english_name(),
        native = language.native_name(),
        title = article.title,
        body = if article.content.is_empty() {
            &article.description
        } else {
            &article.content
        },
    )
}

fn request_body(prompt: &str, format: ResponseFormat) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": format.mime_type(),
            "temperature": 0.7
        }
    })
}

// ============================================================================
// Response parsing
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// One article as the model writes it. Everything but the title is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDraft {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    published_at: String,
    category: Option<String>,
}

/// Text of the first candidate in a `generateContent` envelope.
fn candidate_text(body: &str) -> Result<String, FetchError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Malformed(format!("envelope: {e}")))?;

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(FetchError::Blocked(reason));
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .ok_or_else(|| FetchError::Malformed("no candidates".to_string()))
}

fn parse_articles(
    text: &str,
    language: Language,
    category: Category,
) -> Result<Vec<Article>, FetchError> {
    let drafts: Vec<ArticleDraft> = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| FetchError::Malformed(format!("article list: {e}")))?;

    let mut articles: Vec<Article> = drafts
        .into_iter()
        .filter_map(|draft| into_article(draft, language, category))
        .collect();
    dedupe_ids(&mut articles);
    Ok(articles)
}

/// Give repeated ids a position-derived suffix.
///
/// Models often reuse one placeholder url for every item. The first article
/// keeps its stable id; later ones are rehashed with their index.
fn dedupe_ids(articles: &mut [Article]) {
    let mut seen = HashSet::with_capacity(articles.len());
    for (index, article) in articles.iter_mut().enumerate() {
        if seen.insert(article.id.clone()) {
            continue;
        }
        let mut salt = index;
        let id = loop {
            let candidate = stable_id(&format!("{}#{}", article.id, salt), "");
            if seen.insert(candidate.clone()) {
                break candidate;
            }
            salt += 1;
        };
        tracing::debug!(duplicate = %article.id, id = %id, "Reassigned duplicate article id");
        article.image_url = image_url_for(&id);
        article.id = id;
    }
}

fn image_url_for(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/800/600")
}

/// Tolerate replies wrapped in a Markdown code fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().trim_end_matches("```").trim()
}

fn clean(s: &str) -> String {
    strip_control_chars(s.trim()).into_owned()
}

fn into_article(draft: ArticleDraft, language: Language, category: Category) -> Option<Article> {
    let title = clean(&draft.title);
    if title.is_empty() {
        return None;
    }
    let url = clean(&draft.url);
    let id = stable_id(&url, &title);
    let image_url = image_url_for(&id);
    let category = draft
        .category
        .map(|c| clean(&c))
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| category.as_str().to_string());

    Some(Article {
        id,
        title,
        description: clean(&draft.description),
        content: clean(&draft.content),
        author: clean(&draft.author),
        source: clean(&draft.source),
        url,
        image_url,
        published_at: clean(&draft.published_at),
        category,
        language,
    })
}

async fn read_limited_text(response: reqwest::Response, limit: usize) -> Result<String, FetchError> {
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8)
}
