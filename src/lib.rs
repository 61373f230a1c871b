//! Nexara: a terminal news reader.
//!
//! Headlines come from Gemini when a credential is configured, otherwise
//! from a bundled sample set. Articles can be filtered by category,
//! searched, bookmarked and read in a detail view, with UI strings in nine
//! languages.

pub mod app;
pub mod config;
pub mod gemini;
pub mod i18n;
pub mod keybindings;
pub mod news;
pub mod notify;
pub mod theme;
pub mod ui;
pub mod util;
