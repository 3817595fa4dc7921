use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::options::CleaningOptions;

///
/// Summary of one clean run, serialized camelCase for consumers of the
/// `--report` output.
///
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanReport {
  #[serde(rename = "sourceLength")]
  pub source_len: usize,
  #[serde(rename = "cleanedLength")]
  pub cleaned_len: usize,
  #[serde(rename = "rulesApplied")]
  pub rules_applied: Vec<String>,
  #[serde(rename = "cleanedAt")]
  pub ts: i64,
  #[serde(rename = "source", skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
}

impl CleanReport {
  pub fn new(source_len: usize, cleaned_len: usize, options: &CleaningOptions, ts: i64) -> Self {
    let rules_applied = options
      .active_rules()
      .into_iter()
      .map(|rule| rule.key().to_owned())
      .collect::<Vec<String>>();
    CleanReport {
      source_len,
      cleaned_len,
      rules_applied,
      ts,
      source: None,
    }
  }

  /// Names the input the report describes, e.g. a file path
  pub fn set_source(&mut self, source: &str) {
    if !source.is_empty() {
      self.source = Some(source.to_owned());
    }
  }

  pub fn shrinkage(&self) -> i64 {
    self.source_len as i64 - self.cleaned_len as i64
  }
}
