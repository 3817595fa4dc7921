use fancy_regex::Regex as FancyRegex;

use crate::format::format_html;
use crate::options::CleaningOptions;
use crate::sanitize::sanitize_html;
use crate::string_patterns::*;

const TABLE_TO_DIV_PAIRS: [(&str, &str); 6] = [
  (r"<table[^>]*>", r#"<div class="table">"#),
  (r"</table>", "</div>"),
  (r"<tr[^>]*>", r#"<div class="row">"#),
  (r"</tr>", "</div>"),
  (r"<td[^>]*>", r#"<div class="cell">"#),
  (r"</td>", "</div>"),
];

const SMART_CHARACTER_PAIRS: [(&str, &str); 4] = [
  ("[\u{201c}\u{201d}]", "\""), // curly double quotes
  ("[\u{2018}\u{2019}]", "'"),  // curly single quotes
  ("\u{2026}", "..."),          // horizontal ellipsis
  ("[\u{2013}\u{2014}]", "-"),  // en/em dash
];

///
/// Applies the full cleanup sequence to a raw HTML string: a sanitizer pass
/// driven by the rule set, then the string-level substitutions in fixed
/// order, ending with re-indentation. Total over its input; broken markup
/// comes out best-effort rather than as an error. Rules that contradict one
/// another are settled by order alone, so denying all tags beats any later
/// textual rewrite of specific tags.
///
pub fn clean_html(dirty: &str, options: &CleaningOptions) -> String {
  let mut cleaned = sanitize_html(dirty, options);
  tracing::debug!(source_len = dirty.len(), sanitized_len = cleaned.len(), "sanitizer pass done");
  // leftover directionality attributes go regardless of any rule
  cleaned = cleaned.pattern_replace(r#"\s+dir="[^"]*""#, "", false);
  if options.clear_comments {
    cleaned = cleaned.pattern_replace(r"(?s)<!--.*?-->", "", false);
  }
  if options.clear_span_tags {
    cleaned = cleaned.pattern_replace(r"</?span[^>]*>", "", false);
  }
  if options.clear_successive_nbsp {
    cleaned = cleaned.pattern_replace(r"(&nbsp;){2,}", " ", false);
  }
  if options.clear_tags_with_one_nbsp {
    cleaned = replace_with_backrefs(&cleaned, r"<([^>]+)>&nbsp;</\1>", " ");
  }
  if options.clear_empty_tags {
    cleaned = replace_with_backrefs(&cleaned, r"<([^>]+)>\s*</\1>", "");
  }
  if options.convert_tables_to_div {
    cleaned = cleaned.pattern_replace_pairs(&TABLE_TO_DIV_PAIRS);
  }
  if options.character_encoding {
    cleaned = cleaned.pattern_replace_pairs(&SMART_CHARACTER_PAIRS);
  }
  if options.organize_tree_view {
    cleaned = format_html(&cleaned);
  }
  format_html(&cleaned)
}

///
/// The one-nbsp and empty-tag rules require the closing tag to repeat the
/// captured opening tag text, which needs backreference support the plain
/// regex engine does not offer. Returns the input unchanged if the pattern
/// fails to compile or match.
///
fn replace_with_backrefs(text: &str, pattern: &str, replacement: &str) -> String {
  if let Ok(re) = FancyRegex::new(pattern) {
    re.replace_all(text, replacement).to_string()
  } else {
    text.to_owned()
  }
}
