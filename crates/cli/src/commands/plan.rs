use anyhow::Result;
use autonex_db_storage::EMAIL_VERIFICATION;

/// Print the statements `migrate` would execute, without connecting.
pub(crate) fn run() -> Result<()> {
    let statements = EMAIL_VERIFICATION.statements();
    println!("Migration {} ({} statements):", EMAIL_VERIFICATION.name, statements.len());
    for (index, stmt) in statements.iter().enumerate() {
        println!("  {:>2}. {stmt};", index + 1);
    }
    Ok(())
}
