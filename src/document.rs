use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::clipboard::copy_to_clipboard;
use crate::format::format_html;
use crate::options::{CleanRule, CleaningOptions};
use crate::pipeline::clean_html;
use crate::report::CleanReport;
use crate::theme::Theme;

pub fn get_timestamp() -> i64 {
  let dt = Local::now();
  dt.timestamp()
}

///
/// Which variant the preview pane shows. Set to `Cleaned` only by the clean
/// action; any content change falls back to `Original`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
  Original,
  Cleaned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedSnapshot {
  pub content: String,
  pub ts: i64,
}

impl CleanedSnapshot {
  pub fn new(content: &str) -> Self {
    CleanedSnapshot {
      content: content.to_string(),
      ts: get_timestamp(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.content.trim().len() < 1
  }

  pub fn age(&self) -> i64 {
    get_timestamp() - self.ts
  }
}

///
/// Owns everything the editing surface shares with the cleanup logic: the
/// live document string, the last cleaned snapshot, the view mode, the rule
/// set and the theme. The rich-text widget and the preview pane sit outside;
/// their change events funnel through `set_content` / `edit_preview`.
///
#[derive(Debug, Clone)]
pub struct EditorSession {
  content: String,
  cleaned: Option<CleanedSnapshot>,
  view: ViewMode,
  pub options: CleaningOptions,
  pub theme: Theme,
}

impl EditorSession {
  pub fn new(options: CleaningOptions) -> Self {
    EditorSession {
      content: String::new(),
      cleaned: None,
      view: ViewMode::Original,
      options,
      theme: Theme::default(),
    }
  }

  pub fn with_content(html: &str, options: CleaningOptions) -> Self {
    let mut session = EditorSession::new(options);
    session.content = html.to_string();
    session
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  pub fn view(&self) -> ViewMode {
    self.view
  }

  pub fn cleaned_snapshot(&self) -> Option<&CleanedSnapshot> {
    self.cleaned.as_ref()
  }

  ///
  /// Widget change event: the full document string replaces the current
  /// content, the cleaned snapshot is stale from here on and the preview
  /// falls back to the original variant.
  ///
  pub fn set_content(&mut self, html: &str) {
    self.content = html.to_string();
    self.cleaned = None;
    self.view = ViewMode::Original;
  }

  ///
  /// Preview-pane writeback. The widget echoes the edit as a change event,
  /// so the contract matches `set_content`.
  ///
  pub fn edit_preview(&mut self, text: &str) {
    self.set_content(text);
  }

  ///
  /// Runs the pipeline over the live content, keeps the result as the new
  /// snapshot, replaces the live content with it and switches the preview
  /// to the cleaned variant.
  ///
  pub fn clean(&mut self) -> CleanReport {
    let source_len = self.content.len();
    let cleaned = clean_html(&self.content, &self.options);
    let report = CleanReport::new(source_len, cleaned.len(), &self.options, get_timestamp());
    self.cleaned = Some(CleanedSnapshot::new(&cleaned));
    self.content = cleaned;
    self.view = ViewMode::Cleaned;
    report
  }

  /// The variant the preview pane currently shows
  pub fn displayed(&self) -> &str {
    match (&self.view, &self.cleaned) {
      (ViewMode::Cleaned, Some(snapshot)) => &snapshot.content,
      _ => &self.content,
    }
  }

  /// Displayed variant as the preview renders it
  pub fn displayed_formatted(&self) -> String {
    format_html(self.displayed())
  }

  pub fn toggle_option(&mut self, rule: CleanRule) {
    self.options.toggle(rule);
  }

  /// Presentation only; the document string is never touched
  pub fn toggle_theme(&mut self) {
    self.theme.toggle();
  }

  ///
  /// Copies the displayed variant as plain text. Fire-and-forget: a missing
  /// or refusing clipboard is logged, never propagated.
  ///
  pub fn copy_displayed(&self) {
    if let Err(error) = copy_to_clipboard(self.displayed()) {
      tracing::warn!("{}", error);
    }
  }
}

impl Default for EditorSession {
  fn default() -> Self {
    EditorSession::new(CleaningOptions::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clean_switches_view_and_content() {
    let mut session = EditorSession::with_content("<p>Hi&nbsp;&nbsp;there</p>", CleaningOptions::default());
    assert_eq!(session.view(), ViewMode::Original);
    let report = session.clean();
    assert_eq!(session.view(), ViewMode::Cleaned);
    assert_eq!(session.content(), "<p>Hi there</p>");
    assert_eq!(session.displayed(), session.content());
    assert_eq!(report.cleaned_len, session.content().len());
  }

  #[test]
  fn test_change_invalidates_snapshot() {
    let mut session = EditorSession::with_content("<p>one</p>", CleaningOptions::default());
    session.clean();
    assert!(session.cleaned_snapshot().is_some());
    session.set_content("<p>two</p>");
    assert!(session.cleaned_snapshot().is_none());
    assert_eq!(session.view(), ViewMode::Original);
    assert_eq!(session.displayed(), "<p>two</p>");
  }

  #[test]
  fn test_preview_edit_writes_back() {
    let mut session = EditorSession::default();
    session.edit_preview("<p>edited</p>");
    assert_eq!(session.content(), "<p>edited</p>");
    assert_eq!(session.view(), ViewMode::Original);
  }

  #[test]
  fn test_theme_toggle_leaves_content_alone() {
    let mut session = EditorSession::with_content("<p>stable</p>", CleaningOptions::default());
    let before = session.content().to_string();
    session.toggle_theme();
    assert_eq!(session.theme, Theme::Dark);
    assert_eq!(session.content(), before);
    session.toggle_theme();
    assert_eq!(session.content(), before);
  }

  #[test]
  fn test_toggle_option_flips_rule() {
    let mut session = EditorSession::default();
    assert!(!session.options.clear_tables);
    session.toggle_option(CleanRule::ClearTables);
    assert!(session.options.clear_tables);
  }

  #[test]
  fn test_snapshot_age_counts_from_creation() {
    let snapshot = CleanedSnapshot::new("<p>x</p>");
    assert!(snapshot.age() >= 0);
    assert!(!snapshot.is_empty());
    assert!(CleanedSnapshot::new("  ").is_empty());
  }
}
