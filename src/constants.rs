//! Constants used throughout the application
//!
//! This module centralizes file names, defaults and user-facing messages.

pub const APP_NAME: &str = "bujo-labels";

// Configuration
pub const CONFIG_FILE_NAME: &str = "bujo-labels.toml";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Database
pub const DATABASE_FILE_NAME: &str = "bujo.db";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;

// Logging
pub const LOG_FILE_NAME: &str = "bujo-labels.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Queries
pub const DEFAULT_TIMEZONE: &str = "UTC";

// CLI messages
pub const SUCCESS_LABEL_CREATED: &str = "✅ Label created";
pub const SUCCESS_LABEL_UPDATED: &str = "✅ Label updated";
pub const SUCCESS_LABEL_DELETED: &str = "✅ Label deleted";
pub const INFO_NO_LABELS: &str = "No labels yet";
pub const INFO_NO_ITEMS: &str = "No items carry these labels";
