//! PostgreSQL side of the runner: pool construction and savepoint-guarded execution.

use std::str::FromStr;

use async_trait::async_trait;
use autonex_db_core::DbConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool, Postgres, Transaction};

use crate::error::StorageError;
use crate::runner::StatementExecutor;

/// Build a pool from a parsed configuration.
pub async fn connect(config: &DbConfig) -> Result<PgPool, StorageError> {
    let options = PgConnectOptions::from_str(&config.database_url)?;
    connect_with(options, config).await
}

/// Build a pool from explicit connect options, using `config` for pool limits.
pub async fn connect_with(options: PgConnectOptions, config: &DbConfig) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .test_before_acquire(true)
        .connect_with(options)
        .await?;
    tracing::info!(max_connections = config.max_connections, "PostgreSQL pool ready");
    Ok(pool)
}

/// Runs every statement in its own savepoint inside one outer transaction.
///
/// PostgreSQL aborts the whole transaction on the first error. Rolling back
/// to the statement's savepoint clears that state, so later statements run.
pub struct PgTransactionExecutor<'c> {
    tx: Transaction<'c, Postgres>,
}

impl<'c> PgTransactionExecutor<'c> {
    pub fn new(tx: Transaction<'c, Postgres>) -> Self {
        Self { tx }
    }

    /// Commit the outer transaction. Dropping the executor instead rolls back.
    pub async fn commit(self) -> Result<(), StorageError> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl<'c> StatementExecutor for PgTransactionExecutor<'c> {
    async fn execute(&mut self, sql: &str) -> Result<(), StorageError> {
        let mut savepoint = Connection::begin(&mut *self.tx).await?;

        match sqlx::query(sql).persistent(false).execute(&mut *savepoint).await {
            Ok(result) => {
                savepoint.commit().await?;
                tracing::debug!(rows_affected = result.rows_affected(), "savepoint released");
                Ok(())
            },
            Err(err) => {
                if let Err(rollback_err) = savepoint.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback to savepoint failed");
                }
                Err(err.into())
            },
        }
    }
}
