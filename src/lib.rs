//! Cleans up rich-text-editor HTML with a configurable rule set, then
//! re-indents it. A sanitizer pass with a rule-derived deny-list runs first,
//! followed by string-level substitutions in a fixed order; a small
//! editor-session type models the document / cleaned-snapshot / view-mode
//! state the surrounding UI shares with the pipeline.

pub mod clipboard;
pub mod document;
pub mod format;
pub mod is_truthy;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod string_patterns;
pub mod theme;

pub use document::{CleanedSnapshot, EditorSession, ViewMode};
pub use format::format_html;
pub use options::{CleanRule, CleaningOptions};
pub use pipeline::clean_html;
pub use report::CleanReport;
pub use theme::Theme;
