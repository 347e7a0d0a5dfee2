//! Shared constants for autonex-db.

/// Email of the account the seed update marks as verified.
pub const ADMIN_EMAIL: &str = "admin@autonex.ai";

/// Table the migration alters.
pub const USERS_TABLE: &str = "users";

/// Columns added to the users table, in migration order.
pub const MIGRATED_COLUMNS: [&str; 5] = [
    "is_verified",
    "verification_otp",
    "otp_expires_at",
    "reset_token",
    "reset_token_expires_at",
];

/// Characters of a statement shown when it applied.
pub const APPLIED_PREVIEW_CHARS: usize = 60;

/// Characters of a statement shown when it failed.
pub const FAILED_PREVIEW_CHARS: usize = 40;

/// Characters of a database error message shown for a failed statement.
pub const ERROR_PREVIEW_CHARS: usize = 50;

/// PostgreSQL connection pool: maximum connections.
/// The runner only ever holds one; the spare covers the pool's health checks.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 2;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Environment variable holding the PostgreSQL connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding [`PG_POOL_MAX_CONNECTIONS`].
pub const MAX_CONNECTIONS_VAR: &str = "AUTONEX_DB_MAX_CONNECTIONS";

/// Environment variable overriding [`PG_POOL_ACQUIRE_TIMEOUT_SECS`].
pub const ACQUIRE_TIMEOUT_VAR: &str = "AUTONEX_DB_ACQUIRE_TIMEOUT_SECS";
