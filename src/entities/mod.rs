pub mod group;
pub mod item_label;
pub mod label;
pub mod note;
pub mod project;
pub mod sea_orm_active_enums;
pub mod task;
pub mod transaction;
pub mod user_alias;
pub mod user_group;

pub use group::Entity as Group;
pub use item_label::Entity as ItemLabel;
pub use label::Entity as Label;
pub use note::Entity as Note;
pub use project::Entity as Project;
pub use sea_orm_active_enums::ContentType;
pub use task::Entity as Task;
pub use transaction::Entity as Transaction;
pub use user_alias::Entity as UserAlias;
pub use user_group::Entity as UserGroup;
