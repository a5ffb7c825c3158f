use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::DatabaseConfig;
use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::entities::{group, item_label, label, note, project, task, transaction, user_alias, user_group};

/// Database handle shared by the label service and the repositories
#[derive(Clone)]
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by `config` and make sure the schema exists
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        ensure_database_dir(&config.url)?;

        let mut options = ConnectOptions::new(config.url.clone());
        options.max_connections(config.max_connections).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", config.url))?;
        info!("Storage: connected to {}", config.url);

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Open a private in-memory database.
    ///
    /// The pool is pinned to a single connection; every SQLite in-memory
    /// connection is a separate database.
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new(IN_MEMORY_DATABASE_URL.to_string());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create every table from its entity definition
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Referenced tables first
        let statements = [
            schema.create_table_from_entity(group::Entity),
            schema.create_table_from_entity(user_group::Entity),
            schema.create_table_from_entity(project::Entity),
            schema.create_table_from_entity(label::Entity),
            schema.create_table_from_entity(task::Entity),
            schema.create_table_from_entity(transaction::Entity),
            schema.create_table_from_entity(note::Entity),
            schema.create_table_from_entity(item_label::Entity),
            schema.create_table_from_entity(user_alias::Entity),
        ];

        for mut statement in statements {
            statement.if_not_exists();
            self.conn
                .execute(backend.build(&statement))
                .await
                .context("Failed to create database schema")?;
        }

        debug!("Storage: schema ready");
        Ok(())
    }
}

/// Create the parent directory of a file-backed SQLite database
fn ensure_database_dir(url: &str) -> Result<()> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }
    }
    Ok(())
}
