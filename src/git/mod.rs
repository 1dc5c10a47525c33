pub mod commit;
pub mod repository;
pub mod rewrite;
pub mod validation;

pub use commit::{describe_changes, CommitData, CommitId, EditableField, Person};
pub use repository::Repository;
pub use rewrite::rewrite_history;
