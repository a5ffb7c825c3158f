//! Enumerations stored as columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content an operation or a label reference applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ContentType {
    #[sea_orm(string_value = "LABEL")]
    Label,
    #[sea_orm(string_value = "TASK")]
    Task,
    #[sea_orm(string_value = "TRANSACTION")]
    Transaction,
    #[sea_orm(string_value = "NOTE")]
    Note,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Label => "Label",
            ContentType::Task => "Task",
            ContentType::Transaction => "Transaction",
            ContentType::Note => "Note",
        };
        f.write_str(name)
    }
}
