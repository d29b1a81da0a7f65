//! Core application

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::cli::{self, CliConfig, Commands, UserCommands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME, APP_NAME_LOWER, ENV_LOG};
use crate::data::{DataError, ListingService, NewUser};

pub struct CoreApp {
    pub config: AppConfig,
    pub store: ListingService,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config).await?;
        let result = app.execute(command).await;
        app.store.close().await;

        println!("{}", result?);
        Ok(())
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let store = ListingService::init(&config.database)
            .await
            .with_context(|| format!("Failed to open {} store", config.database.backend))?;

        tracing::debug!(backend = %store.backend(), "{} store ready", APP_NAME);
        Ok(Self { config, store })
    }

    /// Run one command against the store and render its result as JSON
    pub async fn execute(&self, command: Commands) -> Result<String> {
        let repo = self.store.repository();
        let default_limit = self.config.search.default_limit;

        match command {
            Commands::InitDb => {
                self.store
                    .init_schema()
                    .await
                    .inspect_err(log_store_error)
                    .context("Failed to apply schema")?;
                tracing::info!(backend = %self.store.backend(), "Schema applied");
                to_json(&serde_json::json!({
                    "backend": self.store.backend().name(),
                    "schema": "applied",
                }))
            }
            Commands::Properties(args) => {
                let limit = args.limit.unwrap_or(default_limit);
                let listings = repo
                    .search_properties(&args.filters(), Some(limit))
                    .await
                    .inspect_err(log_store_error)
                    .context("Property search failed")?;
                to_json(&listings)
            }
            Commands::Reservations { guest_id, limit } => {
                let limit = limit.unwrap_or(default_limit);
                let reservations = repo
                    .list_guest_reservations(guest_id, Some(limit))
                    .await
                    .inspect_err(log_store_error)
                    .with_context(|| format!("Failed to list reservations of guest {}", guest_id))?;
                to_json(&reservations)
            }
            Commands::User { command } => match command {
                UserCommands::Get { email, id } => {
                    let user = match (email, id) {
                        (Some(email), _) => repo.get_user_by_email(&email).await,
                        (None, Some(id)) => repo.get_user_by_id(id).await,
                        (None, None) => anyhow::bail!("Either --email or --id is required"),
                    }
                    .inspect_err(log_store_error)
                    .context("User lookup failed")?;
                    if user.is_none() {
                        tracing::info!("No matching user");
                    }
                    to_json(&user)
                }
                UserCommands::Create {
                    name,
                    email,
                    password,
                } => {
                    let user = repo
                        .create_user(&NewUser {
                            name,
                            email,
                            password,
                        })
                        .await
                        .inspect_err(log_store_error)
                        .context("Failed to create user")?;
                    tracing::info!(id = user.id, "User registered");
                    to_json(&user)
                }
            },
        }
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        // stdout carries the JSON result
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}

fn log_store_error(err: &DataError) {
    tracing::warn!(
        backend = err.backend(),
        transient = err.is_transient(),
        error = %err,
        "Store operation failed"
    );
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::cli::PropertySearchArgs;
    use crate::core::config::{DatabaseConfig, SearchConfig, SqliteConfig, StoreBackend};
    use crate::data::SqliteService;
    use crate::data::sqlite::repositories::testing::SEED;

    async fn seeded_app(default_limit: i64) -> CoreApp {
        let service = SqliteService::in_memory().await.unwrap();
        sqlx::raw_sql(SEED).execute(service.pool()).await.unwrap();
        CoreApp {
            config: AppConfig {
                database: DatabaseConfig {
                    backend: StoreBackend::Sqlite,
                    sqlite: SqliteConfig {
                        path: ":memory:".into(),
                    },
                    postgres: None,
                },
                search: SearchConfig { default_limit },
            },
            store: ListingService::Sqlite(Arc::new(service)),
        }
    }

    fn parse(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let app = seeded_app(10).await;
        let output = parse(&app.execute(Commands::InitDb).await.unwrap());
        assert_eq!(output["backend"], "sqlite");
        assert_eq!(output["schema"], "applied");
    }

    #[tokio::test]
    async fn test_properties_uses_configured_default_limit() {
        let app = seeded_app(2).await;
        let output = parse(
            &app.execute(Commands::Properties(PropertySearchArgs::default()))
                .await
                .unwrap(),
        );

        let rows = output.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], 3);
        assert!(rows[0]["average_rating"].is_number());
    }

    #[tokio::test]
    async fn test_properties_explicit_limit_wins() {
        let app = seeded_app(2).await;
        let args = PropertySearchArgs {
            owner_id: Some(1),
            limit: Some(10),
            ..Default::default()
        };
        let output = parse(&app.execute(Commands::Properties(args)).await.unwrap());
        assert_eq!(output.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reservations_output() {
        let app = seeded_app(10).await;
        let output = parse(
            &app.execute(Commands::Reservations {
                guest_id: 3,
                limit: None,
            })
            .await
            .unwrap(),
        );

        let rows = output.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["reservation_id"], 1);
        assert_eq!(rows[0]["start_date"], "2018-09-11");
    }

    #[tokio::test]
    async fn test_user_get_missing_prints_null() {
        let app = seeded_app(10).await;
        let output = app
            .execute(Commands::User {
                command: UserCommands::Get {
                    email: Some("nobody@example.com".into()),
                    id: None,
                },
            })
            .await
            .unwrap();
        assert_eq!(output, "null");
    }

    #[tokio::test]
    async fn test_user_create_hides_password() {
        let app = seeded_app(10).await;
        let output = parse(
            &app.execute(Commands::User {
                command: UserCommands::Create {
                    name: "Gus Ortega".into(),
                    email: "gus@example.com".into(),
                    password: "secret-hash".into(),
                },
            })
            .await
            .unwrap(),
        );

        assert_eq!(output["email"], "gus@example.com");
        assert!(output.get("password").is_none());
    }

    #[tokio::test]
    async fn test_store_failure_is_an_error() {
        let app = seeded_app(10).await;
        app.store.close().await;

        let err = app
            .execute(Commands::Reservations {
                guest_id: 3,
                limit: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to list reservations of guest 3"));
        assert!(err.downcast_ref::<DataError>().is_some_and(DataError::is_transient));
    }

    #[tokio::test]
    async fn test_user_create_duplicate_fails() {
        let app = seeded_app(10).await;
        let err = app
            .execute(Commands::User {
                command: UserCommands::Create {
                    name: "Alice".into(),
                    email: "alice@example.com".into(),
                    password: "x".into(),
                },
            })
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Conflict"));
    }
}
