//! Typed error enum for the storage layer.
//!
//! Per-statement failures never surface here; they are recorded in the
//! [`MigrationReport`]. These variants cover the failures that stop a run
//! before or after the statements execute.

use thiserror::Error;

use crate::report::MigrationReport;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Connection settings could not be turned into connect options.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The migration transaction could not be opened.
    #[error("migration error: {0}")]
    Migration(String),

    /// Statements ran but the transaction did not commit; nothing persisted.
    /// Carries the outcomes recorded before the commit.
    #[error("migration error: failed to commit transaction: {message}")]
    CommitFailed { message: String, report: Box<MigrationReport> },
}

impl StorageError {
    /// Message shown to the operator, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.message().to_owned(),
            Self::Database(err) => err.to_string(),
            Self::Configuration(msg) | Self::Migration(msg) => msg.clone(),
            Self::CommitFailed { message, .. } => message.clone(),
        }
    }

    /// Per-statement outcomes of a run whose commit failed.
    pub fn report(&self) -> Option<&MigrationReport> {
        match self {
            Self::CommitFailed { report, .. } => Some(report.as_ref()),
            _ => None,
        }
    }
}

/// Custom `From<sqlx::Error>` rather than a blanket `#[from]`.
///
/// - `Configuration` → `Configuration`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Configuration(inner) => Self::Configuration(inner.to_string()),
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StatementOutcome;

    #[test]
    fn row_not_found_maps_to_database() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
        assert!(err.report().is_none());
    }

    #[test]
    fn configuration_maps_to_configuration() {
        let err = StorageError::from(sqlx::Error::Configuration("bad port".into()));
        assert!(matches!(err, StorageError::Configuration(ref msg) if msg == "bad port"));
        assert_eq!(err.detail(), "bad port");
    }

    #[test]
    fn migration_detail_has_no_prefix() {
        let err = StorageError::Migration("begin failed".to_owned());
        assert_eq!(err.detail(), "begin failed");
        assert_eq!(err.to_string(), "migration error: begin failed");
    }

    #[test]
    fn commit_failure_keeps_report() {
        let mut report = MigrationReport::new("email_verification");
        report.push(StatementOutcome::applied("SELECT 1"));
        report.push(StatementOutcome::failed("SELEC 2", "syntax error"));
        let err = StorageError::CommitFailed {
            message: "duplicate key value".to_owned(),
            report: Box::new(report.clone()),
        };

        assert_eq!(err.report(), Some(&report));
        assert_eq!(err.detail(), "duplicate key value");
        assert_eq!(
            err.to_string(),
            "migration error: failed to commit transaction: duplicate key value"
        );
    }
}
