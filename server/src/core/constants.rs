// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "LightBnB";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "lightbnb";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".lightbnb";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "lightbnb.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "LIGHTBNB_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "LIGHTBNB_LOG";

// =============================================================================
// Environment Variables - Store
// =============================================================================

/// Environment variable for the store backend (sqlite or postgres)
pub const ENV_STORE_BACKEND: &str = "LIGHTBNB_STORE_BACKEND";

/// Environment variable for the PostgreSQL connection URL
pub const ENV_POSTGRES_URL: &str = "LIGHTBNB_POSTGRES_URL";

/// Conventional connection URL variable, used when no PostgreSQL URL is set
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable for the SQLite database file
pub const ENV_SQLITE_PATH: &str = "LIGHTBNB_SQLITE_PATH";

/// Environment variable for the default search result limit
pub const ENV_DEFAULT_LIMIT: &str = "LIGHTBNB_DEFAULT_LIMIT";

// =============================================================================
// Search Defaults
// =============================================================================

/// Rows returned by listing queries when the caller gives no limit
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

// =============================================================================
// SQLite
// =============================================================================

/// SQLite database filename (inside the profile folder)
pub const SQLITE_DB_FILENAME: &str = "lightbnb.db";

/// Maximum SQLite pool connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// PostgreSQL
// =============================================================================

/// Maximum PostgreSQL pool connections
pub const POSTGRES_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection acquire timeout in seconds
pub const POSTGRES_ACQUIRE_TIMEOUT_SECS: u64 = 30;
