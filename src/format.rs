///
/// Re-indents an HTML string by naive bracket counting. Every `><` boundary
/// becomes a line break, then each line shifts an indent counter: down when
/// the line carries a closing tag marker, up when it carries an opening tag
/// and no self-closing `/>`. Tag names are never inspected, so mismatched
/// tags or unslashed void tags will skew the indentation. Deterministic and
/// side-effect free; reformatting already formatted output is a no-op.
///
pub fn format_html(code: &str) -> String {
  let broken = code.replace("><", ">\n<");
  let mut indent: i32 = 0;
  let mut result = String::with_capacity(broken.len() + broken.len() / 4);
  for raw_line in broken.split('\n') {
    // leading whitespace is re-derived from the counter, so reformatting is stable
    let line = raw_line.trim_start();
    if line.contains("</") {
      indent -= 1;
    }
    for _ in 0..indent.max(0) {
      result.push_str("  ");
    }
    result.push_str(line);
    result.push('\n');
    if opens_tag(line) && !line.contains("/>") {
      indent += 1;
    }
  }
  result.trim().to_string()
}

/// `<` followed by anything but a slash
fn opens_tag(line: &str) -> bool {
  line.as_bytes().windows(2).any(|pair| pair[0] == b'<' && pair[1] != b'/')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_nested_indentation() {
    // lines that both open and close print one level shallower, as the
    // counter drops before the line is emitted
    let source = "<div><ul><li>one</li><li>two</li></ul></div>";
    let target = "<div>\n  <ul>\n  <li>one</li>\n  <li>two</li>\n  </ul>\n</div>";
    assert_eq!(format_html(source), target);
  }

  #[test]
  fn test_single_line_stays_flat() {
    let source = r#"<p class="x">Hello World</p>"#;
    assert_eq!(format_html(source), source);
  }

  #[test]
  fn test_plain_text_untouched() {
    assert_eq!(format_html("text"), "text");
  }

  #[test]
  fn test_self_closing_does_not_indent() {
    let source = "<div><br/><p>after</p></div>";
    let target = "<div>\n  <br/>\n<p>after</p>\n</div>";
    assert_eq!(format_html(source), target);
  }

  #[test]
  fn test_idempotent() {
    let source = "<section><article><h2>Title</h2><p>Body</p></article></section>";
    let once = format_html(source);
    assert_eq!(format_html(&once), once);
  }

  #[test]
  fn test_excess_closers_clamp_at_zero() {
    let source = "</div></div><p>ok</p>";
    let formatted = format_html(source);
    assert!(formatted.lines().all(|line| !line.starts_with(' ')));
  }
}
