//! Per-statement outcomes of a migration run.

use std::fmt;

use autonex_db_core::{APPLIED_PREVIEW_CHARS, ERROR_PREVIEW_CHARS, FAILED_PREVIEW_CHARS};
use serde::Serialize;

/// Cut `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Result of executing one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatementOutcome {
    Applied { preview: String },
    Failed { preview: String, error: String },
}

impl StatementOutcome {
    pub fn applied(statement: &str) -> Self {
        Self::Applied { preview: truncate_chars(statement, APPLIED_PREVIEW_CHARS).to_owned() }
    }

    pub fn failed(statement: &str, error: &str) -> Self {
        Self::Failed {
            preview: truncate_chars(statement, FAILED_PREVIEW_CHARS).to_owned(),
            error: truncate_chars(error, ERROR_PREVIEW_CHARS).to_owned(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

impl fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied { preview } => write!(f, "✅ {preview}..."),
            Self::Failed { preview, error } => write!(f, "⚠️  {preview}... - {error}"),
        }
    }
}

/// Ordered outcomes of one run, one per statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub migration: String,
    pub outcomes: Vec<StatementOutcome>,
}

impl MigrationReport {
    pub fn new(migration: impl Into<String>) -> Self {
        Self { migration: migration.into(), outcomes: Vec::new() }
    }

    pub fn push(&mut self, outcome: StatementOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.applied()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_applied())
    }
}
