//! Shared output layer: pretty/text/JSON parity for every subcommand.
//!
//! Each command handler receives an [`OutputMode`] and renders through
//! either the [`Renderable`] trait (rows and reports) or the ad-hoc
//! [`render`] helper (one-off payloads).
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `TINKER_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. `output` key in the user config
//! 4. Default: [`OutputMode::Pretty`] if stdout is a TTY, text if piped.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use tinker_core::error::StoreError;

/// Shared width for pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 64;

/// Write a horizontal separator used by pretty output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output with sections and framing.
    Pretty,
    /// Plain rows for pipes and scripts.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

fn mode_from_name(name: &str) -> Option<OutputMode> {
    match name.to_lowercase().as_str() {
        "pretty" => Some(OutputMode::Pretty),
        "text" => Some(OutputMode::Text),
        "json" => Some(OutputMode::Json),
        _ => None,
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    config_output: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }
    if json_flag {
        return OutputMode::Json;
    }
    if let Some(mode) = format_env.and_then(mode_from_name) {
        return mode;
    }
    if let Some(mode) = config_output.and_then(mode_from_name) {
        return mode;
    }
    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from flags, environment, config, and TTY default.
#[must_use]
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    config_output: Option<&str>,
) -> OutputMode {
    let env_val = std::env::var("TINKER_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), config_output, is_tty)
}

/// A CLI result type that can be rendered in all three modes.
///
/// `render_table` rows must keep the same column order as [`table_headers`].
///
/// [`table_headers`]: Renderable::table_headers
pub trait Renderable: Serialize {
    /// Render for human consumption.
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a single text row.
    fn render_table(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Column headers for text mode. Empty means no header line.
    fn table_headers() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

fn write_json<T: Serialize>(value: &T, w: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value).map_err(io::Error::other)?;
    writeln!(w)
}

/// Render a list of [`Renderable`] items to a writer.
///
/// JSON mode wraps the items in one array; text mode prints a header row
/// (when the type declares one) followed by TSV-like rows.
pub fn render_list_to<R: Renderable>(
    items: &[R],
    mode: OutputMode,
    w: &mut dyn Write,
) -> io::Result<()> {
    match mode {
        OutputMode::Pretty => {
            for item in items {
                item.render_human(w)?;
            }
        }
        OutputMode::Text => {
            let headers = R::table_headers();
            if !headers.is_empty() && !items.is_empty() {
                writeln!(w, "{}", headers.join("\t"))?;
            }
            for item in items {
                item.render_table(w)?;
            }
        }
        OutputMode::Json => write_json(&items, w)?,
    }
    Ok(())
}

/// Render a list of [`Renderable`] items to stdout.
pub fn render_list<R: Renderable>(items: &[R], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_list_to(items, mode, &mut out)
}

/// Render a serializable value to stdout: JSON when asked, otherwise the
/// provided human closure.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => write_json(value, &mut out)?,
        OutputMode::Pretty | OutputMode::Text => human_fn(value, &mut out)?,
    }
    Ok(())
}

/// A structured error with optional suggestion and machine code.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// A plain error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }

    /// An error with a suggestion and machine code.
    pub fn with_details(
        message: impl Into<String>,
        suggestion: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
            error_code: Some(error_code.into()),
        }
    }
}

impl From<&StoreError> for CliError {
    fn from(err: &StoreError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: err.suggestion().map(str::to_string),
            error_code: Some(err.code().to_string()),
        }
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({ "error": error });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(
            Some(OutputMode::Text),
            true,
            Some("pretty"),
            Some("json"),
            true,
        );
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn json_flag_wins_over_env_and_config() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), Some("text"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn env_wins_over_config() {
        let mode = resolve_output_mode_inner(None, false, Some("json"), Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn config_wins_over_tty_default() {
        let mode = resolve_output_mode_inner(None, false, None, Some("json"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn unknown_names_fall_through_to_tty_default() {
        let piped = resolve_output_mode_inner(None, false, Some("fancy"), Some("loud"), false);
        assert_eq!(piped, OutputMode::Text);
        let tty = resolve_output_mode_inner(None, false, None, None, true);
        assert_eq!(tty, OutputMode::Pretty);
    }

    #[test]
    fn cli_error_json_omits_absent_fields() {
        let err = CliError::new("boom");
        let json = serde_json::to_string(&err).expect("serialize");
        assert!(json.contains("boom"));
        assert!(!json.contains("suggestion"));
        assert!(!json.contains("error_code"));
    }

    #[test]
    fn store_error_converts_with_code_and_hint() {
        let err = StoreError::ProjectNotFound("9".to_string());
        let cli: CliError = (&err).into();
        assert_eq!(cli.error_code.as_deref(), Some("project_not_found"));
        assert!(cli.suggestion.is_some());
    }

    #[derive(Serialize)]
    struct Row(u32);

    impl Renderable for Row {
        fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
            writeln!(w, "row {}", self.0)
        }
        fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
            writeln!(w, "{}", self.0)
        }
        fn table_headers() -> &'static [&'static str] {
            &["N"]
        }
    }

    #[test]
    fn list_text_mode_prints_header_then_rows() {
        let mut out = Vec::new();
        render_list_to(&[Row(1), Row(2)], OutputMode::Text, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert_eq!(rendered, "N\n1\n2\n");
    }

    #[test]
    fn list_json_mode_is_one_array() {
        let mut out = Vec::new();
        render_list_to(&[Row(1), Row(2)], OutputMode::Json, &mut out).expect("render");
        let parsed: serde_json::Value =
            serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn empty_list_text_mode_prints_nothing() {
        let mut out = Vec::new();
        render_list_to(&[] as &[Row], OutputMode::Text, &mut out).expect("render");
        assert!(out.is_empty());
    }
}
