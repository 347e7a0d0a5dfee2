//! Storage layer for autonex-db
//!
//! Static migration scripts, the statement runner and its PostgreSQL executor.

pub mod error;
pub mod migrations;
mod pg_executor;
mod report;
mod runner;

pub use error::StorageError;
pub use migrations::{EMAIL_VERIFICATION, Migration, split_statements};
pub use pg_executor::{PgTransactionExecutor, connect, connect_with};
pub use report::{MigrationReport, StatementOutcome, truncate_chars};
pub use runner::{StatementExecutor, run_migration, run_script, run_statements};
