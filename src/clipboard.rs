use std::fmt;

use arboard::Clipboard;

///
/// Write-only, plain-text clipboard access. Callers that mirror the copy
/// button treat failure as non-fatal: a clipboard may simply not exist in
/// headless or restricted environments.
///
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
  let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
  clipboard
    .set_text(text.to_owned())
    .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

#[derive(Debug, Clone)]
pub enum ClipboardError {
  Unavailable(String),
  WriteFailed(String),
}

impl fmt::Display for ClipboardError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {}", msg),
      ClipboardError::WriteFailed(msg) => write!(f, "clipboard write failed: {}", msg),
    }
  }
}

impl std::error::Error for ClipboardError {}
