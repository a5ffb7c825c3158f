//! bujo-labels - label data-access layer for a bullet journal backend
//!
//! This library owns the "label" entity that can be attached to tasks,
//! transactions and notes. It provides label CRUD with per-owner name
//! uniqueness, cascading label removal across all item types, and a
//! cross-entity query returning every project item that carries a set of
//! labels, filtered by group membership and grouped by date.
//!
//! # Modules
//!
//! * [`service`] - The [`LabelService`] and its operations
//! * [`repositories`] - Stateless SeaORM query helpers per table
//! * [`entities`] - SeaORM entity models
//! * [`storage`] - Database connection and schema bootstrap
//! * [`authz`] / [`aliases`] / [`grouping`] - Collaborators used by the service
//! * [`config`] / [`logger`] - Application configuration and logging

/// Alias lookup used when rendering task assignees
pub mod aliases;

/// Authorization checks on content operations
pub mod authz;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types surfaced by the label service
pub mod error;

/// Bucketing of project items by calendar date
pub mod grouping;

/// File logging setup on top of the `log` facade
pub mod logger;

/// Presentation models returned to callers
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Label service: CRUD, cascade delete and label-scoped item queries
pub mod service;

/// Database connection and schema management
pub mod storage;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{group, item_label, label, note, project, task, transaction, user_alias, user_group};
pub use error::{Error, Result};
pub use service::LabelService;
