use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_RESULT_LIMIT, ENV_DATABASE_URL, SQLITE_DB_FILENAME,
};

// =============================================================================
// Store Backend Enum (SQLite or PostgreSQL)
// =============================================================================

/// Listing store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Postgres,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Sqlite => write!(f, "sqlite"),
            StoreBackend::Postgres => write!(f, "postgres"),
        }
    }
}

// =============================================================================
// File Config Types (Optional fields for partial configs)
// =============================================================================

/// PostgreSQL configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PostgresFileConfig {
    /// PostgreSQL connection URL (or use LIGHTBNB_POSTGRES_URL / DATABASE_URL)
    pub url: Option<String>,
}

/// SQLite configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SqliteFileConfig {
    /// Database file path, `~` is expanded
    pub path: Option<String>,
}

/// Database configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DatabaseFileConfig {
    /// Store backend: sqlite (default) or postgres
    pub backend: Option<StoreBackend>,
    pub postgres: Option<PostgresFileConfig>,
    pub sqlite: Option<SqliteFileConfig>,
}

/// Search configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchFileConfig {
    /// Rows returned when a command gives no `--limit`
    pub default_limit: Option<i64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub database: Option<DatabaseFileConfig>,
    pub search: Option<SearchFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(database) = other.database {
            let current = self.database.get_or_insert_with(DatabaseFileConfig::default);
            if database.backend.is_some() {
                tracing::trace!(backend = ?database.backend, "Merging database.backend");
                current.backend = database.backend;
            }
            if let Some(postgres) = database.postgres {
                let current_pg = current
                    .postgres
                    .get_or_insert_with(PostgresFileConfig::default);
                if postgres.url.is_some() {
                    tracing::trace!(url = "***", "Merging database.postgres.url");
                    current_pg.url = postgres.url;
                }
            }
            if let Some(sqlite) = database.sqlite {
                let current_sqlite = current.sqlite.get_or_insert_with(SqliteFileConfig::default);
                if sqlite.path.is_some() {
                    tracing::trace!(path = ?sqlite.path, "Merging database.sqlite.path");
                    current_sqlite.path = sqlite.path;
                }
            }
        }

        if let Some(search) = other.search {
            let current = self.search.get_or_insert_with(SearchFileConfig::default);
            if search.default_limit.is_some() {
                tracing::trace!(default_limit = ?search.default_limit, "Merging search.default_limit");
                current.default_limit = search.default_limit;
            }
        }
    }
}

// =============================================================================
// Final Config Types (Resolved values)
// =============================================================================

/// SQLite configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Absolute path of the database file
    pub path: PathBuf,
}

/// PostgreSQL configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// PostgreSQL connection URL
    pub url: String,
}

/// Database configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub sqlite: SqliteConfig,
    /// Only populated when `backend` is postgres
    pub postgres: Option<PostgresConfig>,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub default_limit: i64,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.lightbnb/lightbnb.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        // 1. Load from profile dir - skip if not exists
        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        // 2. Load from CLI-specified path OR local directory
        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::resolve(
            cli,
            file_config,
            std::env::var(ENV_DATABASE_URL).ok(),
        );

        config.validate()?;

        tracing::debug!(
            backend = %config.database.backend,
            sqlite_path = %config.database.sqlite.path.display(),
            default_limit = config.search.default_limit,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Layer configs: defaults -> file config -> CLI/env overrides
    ///
    /// `database_url` is the conventional `DATABASE_URL`, consulted last for
    /// the PostgreSQL URL.
    fn resolve(cli: &CliConfig, file_config: FileConfig, database_url: Option<String>) -> Self {
        let file_database = file_config.database.unwrap_or_default();
        let file_search = file_config.search.unwrap_or_default();

        let backend = cli.backend.or(file_database.backend).unwrap_or_default();

        let file_sqlite = file_database.sqlite.unwrap_or_default();
        let sqlite_path = cli
            .sqlite_path
            .as_ref()
            .map(|p| expand_path(&p.to_string_lossy()))
            .or_else(|| file_sqlite.path.map(|p| expand_path(&p)))
            .unwrap_or_else(default_sqlite_path);

        // PostgreSQL config (only populated if using postgres backend)
        let postgres = if backend == StoreBackend::Postgres {
            let file_pg = file_database.postgres.unwrap_or_default();
            let url = cli
                .postgres_url
                .clone()
                .or(file_pg.url)
                .or(database_url)
                .unwrap_or_default();
            Some(PostgresConfig { url })
        } else {
            None
        };

        let default_limit = cli
            .default_limit
            .or(file_search.default_limit)
            .unwrap_or(DEFAULT_RESULT_LIMIT);

        Self {
            database: DatabaseConfig {
                backend,
                sqlite: SqliteConfig { path: sqlite_path },
                postgres,
            },
            search: SearchConfig { default_limit },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.backend == StoreBackend::Postgres {
            let missing_url = self
                .database
                .postgres
                .as_ref()
                .is_none_or(|pg| pg.url.trim().is_empty());
            if missing_url {
                anyhow::bail!(
                    "Configuration error: database.postgres.url is required when database.backend is 'postgres'. \
                     Set via LIGHTBNB_POSTGRES_URL, DATABASE_URL or database.postgres.url in config file."
                );
            }
        }

        Ok(())
    }
}

/// Get the profile config path (~/.lightbnb/lightbnb.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

/// Default SQLite database location (~/.lightbnb/lightbnb.db)
fn default_sqlite_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_DOT_FOLDER).join(SQLITE_DB_FILENAME),
        None => expand_path(SQLITE_DB_FILENAME),
    }
}
