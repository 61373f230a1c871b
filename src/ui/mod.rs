//! Terminal user interface.
//!
//! - `loop_runner` - main event loop and terminal management
//! - `input` - keyboard input dispatch
//! - `events` - background task event processing
//! - `helpers` - task spawning (news fetch, browser launch)
//! - `render` - screen layout and overlay dispatch
//! - `articles`, `categories`, `reader`, `language`, `settings`, `help`,
//!   `status` - widgets

mod articles;
mod categories;
mod events;
mod help;
mod helpers;
mod input;
mod language;
mod loop_runner;
mod reader;
mod render;
mod settings;
mod status;

pub use loop_runner::{run, Action};
