use anyhow::{Context, Result};
use clap::Parser;
use nexara::app::{App, AppEvent};
use nexara::config::Config;
use nexara::gemini::GeminiClient;
use nexara::news::{CategoryFilter, Language};
use nexara::theme::ThemeVariant;
use nexara::ui;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "nexara", version, about = "Terminal news reader with Gemini-generated headlines")]
struct Args {
    /// UI and news language code (en, hi, ta, te, ml, es, fr, de, zh)
    #[arg(long, short)]
    language: Option<String>,

    /// Initial category (All, General, Technology, Sports, ...)
    #[arg(long, short)]
    category: Option<String>,

    /// Config file (default: ~/.config/nexara/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore any Gemini credential and show the sample articles
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout; logs go to stderr and stay quiet unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let language = match &args.language {
        Some(code) => Language::from_code(code)
            .with_context(|| format!("Unknown language code '{}'", code))?,
        None => config.language(),
    };
    let category = match &args.category {
        Some(name) => CategoryFilter::parse(name)
            .with_context(|| format!("Unknown category '{}'", name))?,
        None => CategoryFilter::All,
    };

    let client = if args.offline {
        tracing::info!("Offline mode requested, ignoring credential");
        None
    } else {
        build_client(&config)?
    };

    let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
    let mut app = App::new(client, language, expiry_tx);
    app.category = category;

    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!("{}", warning);
    }
    match ThemeVariant::from_str_name(&config.theme) {
        Some(variant) => app.set_theme(variant),
        None => tracing::warn!(theme = %config.theme, "Unknown theme, using dark"),
    }

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);
    ui::run(&mut app, event_tx, event_rx, expiry_rx).await?;

    Ok(())
}

/// The Gemini client, or `None` when no credential is configured.
fn build_client(config: &Config) -> Result<Option<Arc<GeminiClient>>> {
    let Some(api_key) = config.resolve_api_key() else {
        tracing::info!("No Gemini API key found, running with sample articles");
        return Ok(None);
    };

    let http = reqwest::Client::builder()
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;

    let client = GeminiClient::new(
        http,
        api_key,
        config.gemini_model.clone(),
        &config.gemini_base_url,
        config.article_count(),
    )
    .context("Invalid Gemini configuration")?;
    tracing::info!(model = client.model(), "Gemini client ready");
    Ok(Some(Arc::new(client)))
}
