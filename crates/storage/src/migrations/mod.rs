//! Static migration scripts and the statement splitter that feeds the runner.

mod email_verification;

/// A named, parameterless multi-statement SQL script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// The script's statements in literal order.
    pub fn statements(&self) -> Vec<String> {
        split_statements(self.sql)
    }
}

/// Adds `is_verified`, OTP and reset-token columns to `users` and marks the
/// admin account verified. Every statement is safe to re-run.
pub const EMAIL_VERIFICATION: Migration =
    Migration { name: "email_verification", sql: email_verification::SQL };

/// Split a script into executable statements.
///
/// `--` comment lines are removed first, so a comment never swallows the
/// statement below it. The rest is split at `;`, trimmed, and empty pieces
/// are dropped. Quoted semicolons are not recognised.
pub fn split_statements(script: &str) -> Vec<String> {
    let uncommented: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    uncommented
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(str::to_owned)
        .collect()
}
