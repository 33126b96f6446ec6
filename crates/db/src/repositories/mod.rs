//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Repositories issue single
//! parameterized statements; the one multi-statement sequence
//! (project + seed document creation) runs inside a transaction.

pub mod chat_message_repo;
pub mod document_repo;
pub mod member_repo;
pub mod project_repo;
pub mod task_repo;

pub use chat_message_repo::ChatMessageRepo;
pub use document_repo::DocumentRepo;
pub use member_repo::MemberRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
