use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use htmlsweep::is_truthy::IsTruthy;
use htmlsweep::{CleanRule, CleaningOptions, EditorSession};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
  /// Input file (stdin when omitted)
  input: Option<PathBuf>,

  /// Output file (stdout when omitted)
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// JSON file overriding cleanup rules, e.g. { "clearTables": true }
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Enable a cleanup rule
  #[arg(long, value_enum, action = ArgAction::Append, value_name = "RULE")]
  enable: Vec<CleanRule>,

  /// Disable a cleanup rule
  #[arg(long, value_enum, action = ArgAction::Append, value_name = "RULE")]
  disable: Vec<CleanRule>,

  /// Set a rule from a pair such as clear-comments=no
  #[arg(long = "set", action = ArgAction::Append, value_name = "RULE=VALUE")]
  set: Vec<String>,

  /// Copy the cleaned output to the system clipboard
  #[arg(long, action = ArgAction::SetTrue)]
  copy: bool,

  /// Print a JSON summary of the run to stderr
  #[arg(long, action = ArgAction::SetTrue)]
  report: bool,
}

fn main() -> io::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();
  let cli = Cli::parse();

  let source = match &cli.input {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buffer = String::new();
      io::stdin().read_to_string(&mut buffer)?;
      buffer
    }
  };

  let options = build_options(&cli)?;
  let mut session = EditorSession::with_content(&source, options);
  let mut report = session.clean();
  if let Some(path) = &cli.input {
    report.set_source(&path.to_string_lossy());
  }

  match &cli.output {
    Some(path) => fs::write(path, session.content())?,
    None => {
      let stdout = io::stdout();
      let mut handle = stdout.lock();
      handle.write_all(session.content().as_bytes())?;
      handle.write_all(b"\n")?;
    }
  }

  if cli.copy {
    session.copy_displayed();
  }

  if cli.report {
    if let Ok(json) = serde_json::to_string_pretty(&report) {
      eprintln!("{}", json);
    }
  }
  Ok(())
}

///
/// Precedence: panel defaults, then the config file, then environment
/// overrides, then the command line; --disable wins over --enable for the
/// same rule, and --set wins over both.
///
fn build_options(cli: &Cli) -> io::Result<CleaningOptions> {
  let mut options = match &cli.config {
    Some(path) => {
      let raw = fs::read_to_string(path)?;
      serde_json::from_str(&raw)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?
    }
    None => CleaningOptions::default(),
  };
  options.overlay_env();
  for rule in &cli.enable {
    options.set(*rule, true);
  }
  for rule in &cli.disable {
    options.set(*rule, false);
  }
  for pair in &cli.set {
    apply_rule_pair(&mut options, pair);
  }
  Ok(options)
}

fn apply_rule_pair(options: &mut CleaningOptions, pair: &str) {
  let mut parts = pair.splitn(2, '=');
  let key = parts.next().unwrap_or("").trim();
  let value = parts.next().unwrap_or("");
  if let Ok(rule) = CleanRule::from_str(key, true) {
    let current = options.get(rule);
    options.set(rule, value.smart_cast_bool(current));
  } else {
    tracing::warn!(key, "unknown cleanup rule in --set, ignored");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rule_pairs() {
    let mut options = CleaningOptions::default();
    apply_rule_pair(&mut options, "clear-comments=no");
    assert!(!options.clear_comments);
    apply_rule_pair(&mut options, "convert-tables-to-div=yes");
    assert!(options.convert_tables_to_div);
    // unknown keys leave everything untouched
    apply_rule_pair(&mut options, "no-such-rule=yes");
    assert!(options.convert_tables_to_div);
  }

  #[test]
  fn test_value_enum_names() {
    assert!(CleanRule::from_str("clear-all-tags", true).is_ok());
    assert!(CleanRule::from_str("organize-tree-view", true).is_ok());
  }
}
