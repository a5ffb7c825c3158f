//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Every method is generic over [`sea_orm::ConnectionTrait`] so it can run on
//! a plain connection or inside an open transaction.

pub mod alias;
pub mod group;
pub mod item_label;
pub mod label;
pub mod note;
pub mod project;
pub mod task;
pub mod transaction;

/// Ids bound per `IN (..)` list. SQLite caps the number of bound
/// parameters in one statement, so longer id lists are queried in chunks.
pub(crate) const ID_CHUNK_SIZE: usize = 500;

pub use alias::AliasRepository;
pub use group::GroupRepository;
pub use item_label::ItemLabelRepository;
pub use label::LabelRepository;
pub use note::NoteRepository;
pub use project::ProjectRepository;
pub use task::TaskRepository;
pub use transaction::TransactionRepository;
