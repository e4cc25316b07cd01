//! Inline AI completion ghost text for editor hosts.
//!
//! A suggestion arrives as an ordered list of text lines; this crate turns
//! it into positioned virtual-text annotations (the first line inline at
//! the cursor, the rest as virtual lines below) and, on acceptance, splices
//! the lines into the real buffer while preserving the cursor, undo
//! grouping, and the host's auto-formatting settings.
//!
//! The crate never talks to a concrete editor: a host implements
//! [`EditorHost`] (cursor, lines, overlay marks, viewport, intents) and
//! [`FormattingControl`] (formatting snapshot/apply), and drives a
//! [`SuggestionSession`] from its event loop:
//!
//! - [`SuggestionSession::render_suggestion`] draws ghost text
//! - [`SuggestionSession::clear_suggestion`] removes it
//! - [`SuggestionSession::commit_suggestion`] accepts it into the buffer
//! - [`SuggestionSession::feed_fallback_key`] is the tab-key fallback path
//!
//! Fetching suggestions, keybindings, and configuration loading belong to
//! the surrounding plugin, not to this crate.

pub mod annotation;
pub mod commit;
pub mod config;
pub mod error;
pub mod format_guard;
pub mod host;
pub mod overlay;
pub mod session;
pub mod suggestion;
pub mod viewport;

pub use config::{HighlightConfig, SuggestConfig};
pub use error::SuggestError;
pub use format_guard::FormattingSettings;
pub use host::{CursorPos, EditorHost, FormattingControl, ViewportGeometry};
pub use overlay::OverlayNamespace;
pub use session::SuggestionSession;
pub use suggestion::Suggestion;
