use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::is_truthy::IsTruthy;

fn enabled() -> bool {
  true
}

///
/// One boolean per cleanup rule. Rules are independent; the pipeline fixes
/// the order of application. Serde defaults match the option panel defaults,
/// so a partial JSON config file only overrides the rules it names.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CleaningOptions {
  #[serde(default = "enabled")]
  pub clear_inline_styles: bool,
  #[serde(default = "enabled")]
  pub clear_classes_and_ids: bool,
  #[serde(default = "enabled")]
  pub character_encoding: bool,
  #[serde(default = "enabled")]
  pub clear_comments: bool,
  #[serde(default = "enabled")]
  pub clear_span_tags: bool,
  #[serde(default = "enabled")]
  pub clear_successive_nbsp: bool,
  #[serde(default = "enabled")]
  pub clear_tags_with_one_nbsp: bool,
  pub clear_empty_tags: bool,
  pub clear_tag_attributes: bool,
  pub clear_all_tags: bool,
  pub clear_images: bool,
  pub clear_links: bool,
  pub clear_tables: bool,
  pub convert_tables_to_div: bool,
  pub organize_tree_view: bool,
}

impl Default for CleaningOptions {
  fn default() -> Self {
    CleaningOptions {
      clear_inline_styles: true,
      clear_classes_and_ids: true,
      character_encoding: true,
      clear_comments: true,
      clear_span_tags: true,
      clear_successive_nbsp: true,
      clear_tags_with_one_nbsp: true,
      clear_empty_tags: false,
      clear_tag_attributes: false,
      clear_all_tags: false,
      clear_images: false,
      clear_links: false,
      clear_tables: false,
      convert_tables_to_div: false,
      organize_tree_view: false,
    }
  }
}

impl CleaningOptions {

  /// All destructive rules off, structural cleanup untouched
  pub fn non_destructive(&self) -> bool {
    !self.clear_empty_tags && !self.clear_tag_attributes && !self.clear_all_tags
      && !self.clear_images && !self.clear_links && !self.clear_tables
      && !self.convert_tables_to_div
  }

  pub fn get(&self, rule: CleanRule) -> bool {
    match rule {
      CleanRule::ClearInlineStyles => self.clear_inline_styles,
      CleanRule::ClearClassesAndIds => self.clear_classes_and_ids,
      CleanRule::CharacterEncoding => self.character_encoding,
      CleanRule::ClearComments => self.clear_comments,
      CleanRule::ClearSpanTags => self.clear_span_tags,
      CleanRule::ClearSuccessiveNbsp => self.clear_successive_nbsp,
      CleanRule::ClearTagsWithOneNbsp => self.clear_tags_with_one_nbsp,
      CleanRule::ClearEmptyTags => self.clear_empty_tags,
      CleanRule::ClearTagAttributes => self.clear_tag_attributes,
      CleanRule::ClearAllTags => self.clear_all_tags,
      CleanRule::ClearImages => self.clear_images,
      CleanRule::ClearLinks => self.clear_links,
      CleanRule::ClearTables => self.clear_tables,
      CleanRule::ConvertTablesToDiv => self.convert_tables_to_div,
      CleanRule::OrganizeTreeView => self.organize_tree_view,
    }
  }

  pub fn set(&mut self, rule: CleanRule, value: bool) {
    let field = match rule {
      CleanRule::ClearInlineStyles => &mut self.clear_inline_styles,
      CleanRule::ClearClassesAndIds => &mut self.clear_classes_and_ids,
      CleanRule::CharacterEncoding => &mut self.character_encoding,
      CleanRule::ClearComments => &mut self.clear_comments,
      CleanRule::ClearSpanTags => &mut self.clear_span_tags,
      CleanRule::ClearSuccessiveNbsp => &mut self.clear_successive_nbsp,
      CleanRule::ClearTagsWithOneNbsp => &mut self.clear_tags_with_one_nbsp,
      CleanRule::ClearEmptyTags => &mut self.clear_empty_tags,
      CleanRule::ClearTagAttributes => &mut self.clear_tag_attributes,
      CleanRule::ClearAllTags => &mut self.clear_all_tags,
      CleanRule::ClearImages => &mut self.clear_images,
      CleanRule::ClearLinks => &mut self.clear_links,
      CleanRule::ClearTables => &mut self.clear_tables,
      CleanRule::ConvertTablesToDiv => &mut self.convert_tables_to_div,
      CleanRule::OrganizeTreeView => &mut self.organize_tree_view,
    };
    *field = value;
  }

  pub fn toggle(&mut self, rule: CleanRule) {
    self.set(rule, !self.get(rule));
  }

  ///
  /// Set a rule from a string value, accepting truthy/falsy variants
  /// such as "yes", "no", "1", "0", "true", "false"
  ///
  pub fn set_smart(&mut self, rule: CleanRule, value: &str) {
    let current = self.get(rule);
    self.set(rule, value.smart_cast_bool(current));
  }

  ///
  /// Enabled rules in pipeline order, for reporting
  ///
  pub fn active_rules(&self) -> Vec<CleanRule> {
    CleanRule::ALL.iter().filter(|rule| self.get(**rule)).map(|rule| *rule).collect()
  }

  ///
  /// Overrides rules from the environment, e.g. HTMLSWEEP_CLEAR_COMMENTS=no.
  /// Unset or unparseable values leave the rule as it was.
  ///
  pub fn overlay_env(&mut self) {
    for rule in CleanRule::ALL {
      if let Ok(value) = dotenv::var(rule.env_key()) {
        self.set_smart(rule, &value);
      }
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum CleanRule {
  ClearInlineStyles,
  ClearClassesAndIds,
  CharacterEncoding,
  ClearComments,
  ClearSpanTags,
  ClearSuccessiveNbsp,
  ClearTagsWithOneNbsp,
  ClearEmptyTags,
  ClearTagAttributes,
  ClearAllTags,
  ClearImages,
  ClearLinks,
  ClearTables,
  ConvertTablesToDiv,
  OrganizeTreeView,
}

impl CleanRule {
  pub const ALL: [CleanRule; 15] = [
    CleanRule::ClearInlineStyles,
    CleanRule::ClearClassesAndIds,
    CleanRule::CharacterEncoding,
    CleanRule::ClearComments,
    CleanRule::ClearSpanTags,
    CleanRule::ClearSuccessiveNbsp,
    CleanRule::ClearTagsWithOneNbsp,
    CleanRule::ClearEmptyTags,
    CleanRule::ClearTagAttributes,
    CleanRule::ClearAllTags,
    CleanRule::ClearImages,
    CleanRule::ClearLinks,
    CleanRule::ClearTables,
    CleanRule::ConvertTablesToDiv,
    CleanRule::OrganizeTreeView,
  ];

  pub fn key(&self) -> &'static str {
    match self {
      CleanRule::ClearInlineStyles => "clearInlineStyles",
      CleanRule::ClearClassesAndIds => "clearClassesAndIds",
      CleanRule::CharacterEncoding => "characterEncoding",
      CleanRule::ClearComments => "clearComments",
      CleanRule::ClearSpanTags => "clearSpanTags",
      CleanRule::ClearSuccessiveNbsp => "clearSuccessiveNbsp",
      CleanRule::ClearTagsWithOneNbsp => "clearTagsWithOneNbsp",
      CleanRule::ClearEmptyTags => "clearEmptyTags",
      CleanRule::ClearTagAttributes => "clearTagAttributes",
      CleanRule::ClearAllTags => "clearAllTags",
      CleanRule::ClearImages => "clearImages",
      CleanRule::ClearLinks => "clearLinks",
      CleanRule::ClearTables => "clearTables",
      CleanRule::ConvertTablesToDiv => "convertTablesToDiv",
      CleanRule::OrganizeTreeView => "organizeTreeView",
    }
  }

  /// Environment variable governing this rule
  pub fn env_key(&self) -> String {
    let mut key = "HTMLSWEEP_".to_string();
    for letter in self.key().chars() {
      if letter.is_uppercase() {
        key.push('_');
      }
      key.extend(letter.to_uppercase());
    }
    key
  }

  ///
  /// Human label for toggle panels: the camel-case key with
  /// spaces before capitals and an upper-cased first letter
  ///
  pub fn label(&self) -> String {
    let mut label = String::new();
    for (index, letter) in self.key().chars().enumerate() {
      if index < 1 {
        label.extend(letter.to_uppercase());
      } else if letter.is_uppercase() {
        label.push(' ');
        label.push(letter);
      } else {
        label.push(letter);
      }
    }
    label
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_panel() {
    let options = CleaningOptions::default();
    assert!(options.clear_inline_styles);
    assert!(options.clear_successive_nbsp);
    assert!(!options.clear_empty_tags);
    assert!(!options.clear_all_tags);
    assert!(options.non_destructive());
  }

  #[test]
  fn test_toggle_and_smart_set() {
    let mut options = CleaningOptions::default();
    options.toggle(CleanRule::ClearTables);
    assert!(options.clear_tables);
    options.set_smart(CleanRule::ClearTables, "no");
    assert!(!options.clear_tables);
    options.set_smart(CleanRule::ClearEmptyTags, "1");
    assert!(options.clear_empty_tags);
  }

  #[test]
  fn test_partial_config_keeps_defaults() {
    let options: CleaningOptions = serde_json::from_str(r#"{ "clearComments": false, "clearTables": true }"#).unwrap();
    assert!(!options.clear_comments);
    assert!(options.clear_tables);
    assert!(options.clear_inline_styles);
    assert!(!options.clear_all_tags);
  }

  #[test]
  fn test_labels() {
    assert_eq!(CleanRule::ClearInlineStyles.label(), "Clear Inline Styles");
    assert_eq!(CleanRule::CharacterEncoding.label(), "Character Encoding");
  }

  #[test]
  fn test_env_keys() {
    assert_eq!(CleanRule::ClearSuccessiveNbsp.env_key(), "HTMLSWEEP_CLEAR_SUCCESSIVE_NBSP");
    assert_eq!(CleanRule::ClearAllTags.env_key(), "HTMLSWEEP_CLEAR_ALL_TAGS");
  }
}
