use serde::{Deserialize, Serialize};
use std::fmt;

/// Flags controlling one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Normalize language punctuation (`¿ ¡ « » — – …`).
    pub language_mode: bool,
    /// Record what each pass changed.
    pub summary_mode: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_language(mut self, enabled: bool) -> Self {
        self.language_mode = enabled;
        self
    }
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.summary_mode = enabled;
        self
    }
}

/// Category of edit, one per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Whitespace,
    Quotes,
    UtmParams,
    LanguagePunct,
}

impl ChangeKind {
    /// Stable machine label.
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Whitespace => "whitespace",
            ChangeKind::Quotes => "quotes",
            ChangeKind::UtmParams => "utm_params",
            ChangeKind::LanguagePunct => "language_punct",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChangeKind::Whitespace => "Extra whitespace removed",
            ChangeKind::Quotes => "Typographic quotes replaced",
            ChangeKind::UtmParams => "UTM tracking parameters removed",
            ChangeKind::LanguagePunct => "Language punctuation replacements",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub count: usize,
}

/// Ordered change records, in pass order. Passes that changed nothing are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary(pub Vec<ChangeRecord>);

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; zero counts are dropped.
    pub fn record(&mut self, kind: ChangeKind, count: usize) {
        if count > 0 {
            self.0.push(ChangeRecord { kind, count });
        }
    }

    pub fn count(&self, kind: ChangeKind) -> usize {
        self.0
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.0
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOutcome {
    pub text: String,
    pub summary: Summary,
}
