//! Sequential, best-effort migration runner.
//!
//! Each statement gets exactly one attempt. A failure is recorded in the
//! report and the run moves on; earlier successes are never rolled back.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::migrations::{Migration, split_statements};
use crate::pg_executor::PgTransactionExecutor;
use crate::report::{MigrationReport, StatementOutcome};

/// Executes one SQL statement inside the run's transaction scope.
#[async_trait]
pub trait StatementExecutor: Send {
    /// Execute `sql`. A failure must leave the executor usable for the next statement.
    async fn execute(&mut self, sql: &str) -> Result<(), StorageError>;
}

/// Execute `statements` in order, recording one outcome per statement.
///
/// Never fails: statement errors are caught, logged and recorded.
pub async fn run_statements<E>(executor: &mut E, migration: &str, statements: &[String]) -> MigrationReport
where
    E: StatementExecutor + ?Sized,
{
    let mut report = MigrationReport::new(migration);

    for (index, stmt) in statements.iter().enumerate() {
        match executor.execute(stmt).await {
            Ok(()) => {
                tracing::debug!(migration, index, "statement applied");
                report.push(StatementOutcome::applied(stmt));
            },
            Err(err) => {
                tracing::warn!(migration, index, error = %err, "statement failed, continuing");
                report.push(StatementOutcome::failed(stmt, &err.detail()));
            },
        }
    }

    report
}

/// Run a static migration in one transaction.
pub async fn run_migration(pool: &PgPool, migration: &Migration) -> Result<MigrationReport, StorageError> {
    run_script(pool, migration.name, migration.sql).await
}

/// Split `script` and run it in one transaction, committing at the end.
///
/// Only failures to open or commit the transaction are returned as errors.
/// A commit failure returns [`StorageError::CommitFailed`] with the outcomes
/// recorded so far.
pub async fn run_script(pool: &PgPool, name: &str, script: &str) -> Result<MigrationReport, StorageError> {
    let statements = split_statements(script);
    tracing::info!(migration = name, statements = statements.len(), "Running database migration");

    let tx = pool
        .begin()
        .await
        .map_err(|e| StorageError::Migration(format!("failed to begin transaction: {e}")))?;
    let mut executor = PgTransactionExecutor::new(tx);

    let report = run_statements(&mut executor, name, &statements).await;

    if let Err(err) = executor.commit().await {
        tracing::error!(
            migration = name,
            applied = report.applied(),
            failed = report.failed(),
            error = %err,
            "Migration transaction failed to commit; no statement persisted"
        );
        return Err(StorageError::CommitFailed { message: err.detail(), report: Box::new(report) });
    }

    if report.has_failures() {
        tracing::warn!(
            migration = name,
            applied = report.applied(),
            failed = report.failed(),
            "Migration committed with failed statements; review the output"
        );
    } else {
        tracing::info!(migration = name, applied = report.applied(), "Migration committed");
    }

    Ok(report)
}
