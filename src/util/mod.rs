//! Utility functions shared by the UI and the Gemini client.
//!
//! - **Text**: Unicode-aware width/truncation, control-character stripping,
//!   relative timestamps, word wrap
//! - **URL validation**: vetting article links before opening them

mod text;
mod url_validator;

pub use text::{
    display_width, relative_time, strip_control_chars, truncate_to_width, wrap_to_width,
};
pub use url_validator::{validate_article_url, UrlValidationError};

/// Maximum length of the search query typed in the UI.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
