//! Terminal rendering: status lines and the change summary.

use crate::types::Summary;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

pub const SEPARATOR: &str = "---";

/// Colors status lines when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color unless disabled by flag, `NO_COLOR`, or a non-terminal stdout.
    pub fn detect(no_color: bool) -> Self {
        let color = !no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self { color }
    }

    pub fn success(&self, msg: &str) -> String {
        if self.color {
            msg.bright_green().to_string()
        } else {
            msg.to_string()
        }
    }

    pub fn warn(&self, msg: &str) -> String {
        if self.color {
            msg.yellow().to_string()
        } else {
            msg.to_string()
        }
    }

    pub fn error(&self, msg: &str) -> String {
        if self.color {
            msg.bright_red().to_string()
        } else {
            msg.to_string()
        }
    }

    pub fn info(&self, msg: &str) -> String {
        if self.color {
            msg.cyan().to_string()
        } else {
            msg.to_string()
        }
    }
}

/// Human summary block: one line per change, then both lengths.
pub fn render_summary(painter: &Painter, summary: &Summary, raw: &str, cleaned: &str) -> String {
    let mut lines = vec![painter.info(&format!("{SEPARATOR} Summary {SEPARATOR}"))];

    if summary.is_empty() {
        lines.push(painter.warn("No changes"));
    }
    for record in summary.records() {
        lines.push(painter.warn(&format!(
            "{}: {}",
            record.kind.description(),
            record.count
        )));
    }

    lines.push(painter.info(&format!("Original length: {}", raw.chars().count())));
    lines.push(painter.info(&format!("Cleaned length: {}", cleaned.chars().count())));
    lines.join("\n")
}

/// Machine-readable report for `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub summary: &'a Summary,
    pub original_length: usize,
    pub cleaned_length: usize,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a str, summary: &'a Summary, raw: &str, cleaned: &str) -> Self {
        Self {
            source,
            cleaned: None,
            output: None,
            summary,
            original_length: raw.chars().count(),
            cleaned_length: cleaned.chars().count(),
        }
    }

    pub fn with_cleaned(mut self, cleaned: &'a str) -> Self {
        self.cleaned = Some(cleaned);
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeKind;

    #[test]
    fn test_render_summary_plain() {
        let mut summary = Summary::new();
        summary.record(ChangeKind::Quotes, 4);
        summary.record(ChangeKind::UtmParams, 1);

        let out = render_summary(&Painter::new(false), &summary, "abcdef", "abc");
        assert_eq!(
            out,
            "--- Summary ---\n\
             Typographic quotes replaced: 4\n\
             UTM tracking parameters removed: 1\n\
             Original length: 6\n\
             Cleaned length: 3"
        );
    }

    #[test]
    fn test_render_summary_empty() {
        let out = render_summary(&Painter::new(false), &Summary::new(), "same", "same");
        assert!(out.contains("No changes"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_painter_colors() {
        assert!(Painter::new(true).error("boom").contains("\x1b["));
        assert_eq!(Painter::new(false).error("boom"), "boom");
    }

    #[test]
    fn test_report_json() {
        let mut summary = Summary::new();
        summary.record(ChangeKind::Whitespace, 2);
        let json = Report::new("stdin", &summary, "a   b", "a b")
            .with_cleaned("a b")
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "stdin");
        assert_eq!(value["cleaned"], "a b");
        assert_eq!(value["summary"][0]["kind"], "whitespace");
        assert_eq!(value["summary"][0]["count"], 2);
        assert_eq!(value["original_length"], 5);
        assert!(value.get("output").is_none());
    }
}
