use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::options::CleaningOptions;

///
/// Builds the sanitizer pass from the cleanup rules. The builder starts from
/// a permissive attribute set so markup survives untouched unless a rule
/// denies it, then rules subtract tags and attributes. Comments are left
/// alone here: the comment rule owns their removal later in the pipeline.
/// The sanitizer must never add markup of its own, hence `link_rel(None)`.
///
pub fn build_sanitizer(options: &CleaningOptions) -> Builder<'static> {
  let mut builder = Builder::default();
  builder
    .strip_comments(false)
    .link_rel(None)
    .add_generic_attributes([
      "class", "id", "style", "title", "width", "height", "align", "colspan", "rowspan",
    ]);
  if options.clear_inline_styles {
    builder.rm_generic_attributes(["style"]);
  }
  if options.clear_classes_and_ids {
    builder.rm_generic_attributes(["class", "id"]);
  }
  if options.clear_tag_attributes {
    builder.generic_attributes(HashSet::new());
    builder.tag_attributes(HashMap::new());
  }
  let mut denied_tags: Vec<&str> = vec![];
  if options.clear_images {
    denied_tags.push("img");
  }
  if options.clear_links {
    denied_tags.push("a");
  }
  if options.clear_tables {
    denied_tags.extend(["table", "thead", "tbody", "tr", "td", "th"]);
  }
  builder.rm_tags(denied_tags);
  if options.clear_all_tags {
    // denied tags are dropped, their text content survives
    builder.tags(HashSet::new());
  }
  builder
}

pub fn sanitize_html(html: &str, options: &CleaningOptions) -> String {
  build_sanitizer(options).clean(html).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_rules_strip_styles_and_classes() {
    let options = CleaningOptions::default();
    let cleaned = sanitize_html(r#"<p style="color:red" class="x" id="y">Hi</p>"#, &options);
    assert_eq!(cleaned, "<p>Hi</p>");
  }

  #[test]
  fn test_relaxed_rules_keep_classes() {
    let mut options = CleaningOptions::default();
    options.clear_classes_and_ids = false;
    let cleaned = sanitize_html(r#"<p style="color:red" class="x">Hi</p>"#, &options);
    assert_eq!(cleaned, r#"<p class="x">Hi</p>"#);
  }

  #[test]
  fn test_dir_attribute_never_allowed() {
    let options = CleaningOptions::default();
    let cleaned = sanitize_html(r#"<p dir="rtl">right to left</p>"#, &options);
    assert!(!cleaned.contains("dir="));
  }

  #[test]
  fn test_deny_images_and_links() {
    let mut options = CleaningOptions::default();
    options.clear_images = true;
    options.clear_links = true;
    let cleaned = sanitize_html(r#"<p><img src="a.png"><a href="/x">go</a></p>"#, &options);
    assert!(!cleaned.contains("<img"));
    assert!(!cleaned.contains("<a"));
    assert!(cleaned.contains("go"));
  }

  #[test]
  fn test_deny_all_tags_keeps_text() {
    let mut options = CleaningOptions::default();
    options.clear_all_tags = true;
    let cleaned = sanitize_html("<div><p>Hello <b>World</b></p></div>", &options);
    assert_eq!(cleaned, "Hello World");
  }

  #[test]
  fn test_no_rel_injected_on_links() {
    let options = CleaningOptions::default();
    let cleaned = sanitize_html(r#"<a href="https://example.com">x</a>"#, &options);
    assert!(!cleaned.contains("rel="));
  }
}
