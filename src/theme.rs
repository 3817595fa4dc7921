use serde::{Deserialize, Serialize};

///
/// Presentation-only light/dark switch. Affects widget skin and preview
/// stylesheet names, never document content.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  Light,
  Dark,
}

impl Default for Theme {
  fn default() -> Self {
    Theme::Light
  }
}

impl Theme {
  pub fn toggle(&mut self) {
    *self = match *self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    };
  }

  /// Editor widget skin name
  pub fn skin(&self) -> &'static str {
    match self {
      Theme::Light => "oxide",
      Theme::Dark => "oxide-dark",
    }
  }

  /// Stylesheet variant for the editable content area
  pub fn content_css(&self) -> &'static str {
    match self {
      Theme::Light => "default",
      Theme::Dark => "dark",
    }
  }

  pub fn is_dark(&self) -> bool {
    *self == Theme::Dark
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_toggle_cycles() {
    let mut theme = Theme::default();
    assert_eq!(theme, Theme::Light);
    theme.toggle();
    assert_eq!(theme.skin(), "oxide-dark");
    theme.toggle();
    assert_eq!(theme.content_css(), "default");
  }
}
