use regex::{Error, Regex};

fn build_regex(pattern: &str, case_insensitive: bool) -> Result<Regex, Error> {
  let mut parts: Vec<&str> = vec![];
  if case_insensitive {
    parts.push("(?i)");
  }
  parts.push(pattern);
  let regex_str = parts.concat();
  Regex::new(&regex_str)
}

pub trait PatternMatch {

  ///
  /// Simple regex-compatible match method that will return false
  /// if the pattern does not match the source string or the regex fails
  ///
  fn pattern_match(&self, pattern: &str, case_insensitive: bool) -> bool;

  ///
  /// Optional regex-enabled replace method that will return None if the regex fails
  ///
  fn pattern_replace_opt(&self, pattern: &str, replacement: &str, case_insensitive: bool) -> Option<Self> where Self: Sized;

  ///
  /// Simple regex-enabled replace method that will return the same string if the regex fails
  ///
  fn pattern_replace(&self, pattern: &str, replacement: &str, case_insensitive: bool) -> Self where Self: Sized;
}

impl PatternMatch for String {

  fn pattern_match(&self, pattern: &str, case_insensitive: bool) -> bool {
    if let Ok(re) = build_regex(pattern, case_insensitive) {
      re.is_match(self)
    } else {
      false
    }
  }

  fn pattern_replace_opt(&self, pattern: &str, replacement: &str, case_insensitive: bool) -> Option<String> {
    if let Ok(re) = build_regex(pattern, case_insensitive) {
      Some(re.replace_all(self, replacement).to_string())
    } else {
      None
    }
  }

  fn pattern_replace(&self, pattern: &str, replacement: &str, case_insensitive: bool) -> String {
    self.pattern_replace_opt(pattern, replacement, case_insensitive).unwrap_or(self.to_owned())
  }
}

pub trait PatternReplaceMany {
  ///
  /// Replaces multiple pattern/replacement pairs in sequence, case-sensitively.
  /// Pairs with invalid patterns are skipped.
  ///
  fn pattern_replace_pairs(&self, replacement_pairs: &[(&str, &str)]) -> Self where Self: Sized;

  ///
  /// As above with explicit case sensitivity per pair
  ///
  fn pattern_replace_sets(&self, replacement_sets: &[(&str, &str, bool)]) -> Self where Self: Sized;
}

impl PatternReplaceMany for String {

  fn pattern_replace_pairs(&self, replacement_pairs: &[(&str, &str)]) -> String {
    let mut return_string = self.clone();
    for replacement_pair in replacement_pairs {
      let (pattern, replacement) = *replacement_pair;
      if let Some(new_string) = return_string.pattern_replace_opt(pattern, replacement, false) {
        return_string = new_string;
      }
    }
    return_string
  }

  fn pattern_replace_sets(&self, replacement_sets: &[(&str, &str, bool)]) -> String {
    let mut return_string = self.clone();
    for replacement_set in replacement_sets {
      let (pattern, replacement, case_insensitive) = *replacement_set;
      if let Some(new_string) = return_string.pattern_replace_opt(pattern, replacement, case_insensitive) {
        return_string = new_string;
      }
    }
    return_string
  }
}
