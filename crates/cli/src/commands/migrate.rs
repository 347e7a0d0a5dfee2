//! Apply the email verification migration to the configured database.
//!
//! Idempotent: every column is added with `IF NOT EXISTS` and the seed update
//! targets one fixed row. Failed statements are reported and skipped.

use anyhow::{Context, Result, bail};
use autonex_db_core::DbConfig;
use autonex_db_storage::{EMAIL_VERIFICATION, MigrationReport, connect, run_migration};

pub(crate) async fn run(json: bool, strict: bool) -> Result<()> {
    let config = DbConfig::from_env()?;
    let pool = connect(&config).await.context("failed to connect to migration target")?;

    if !json {
        println!("🔄 Running database migration...");
    }

    let result = run_migration(&pool, &EMAIL_VERIFICATION).await;
    pool.close().await;

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            // Outcomes from a rolled-back run still tell the operator what broke.
            if let Some(report) = err.report() {
                println!("{}", render(report, json)?);
            }
            return Err(err.into());
        },
    };

    println!("{}", render(&report, json)?);
    if !json {
        println!("\n✅ Migration complete!");
    }

    exit_status(&report, strict)
}

/// One line per outcome, or the whole report as pretty JSON.
fn render(report: &MigrationReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    Ok(report.outcomes.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}

/// Failed statements only affect the exit code under `--strict`.
fn exit_status(report: &MigrationReport, strict: bool) -> Result<()> {
    if strict && report.has_failures() {
        bail!("{} of {} statements failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}
