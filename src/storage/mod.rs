//! Local storage module for label and project item persistence
//!
//! This module owns the SeaORM database connection and creates the schema
//! for:
//! - Labels
//! - Groups, memberships and projects
//! - Tasks, transactions and notes
//! - Item-label references
//! - User aliases

pub mod db;

pub use db::LocalStorage;
