//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` input DTOs with `Option` fields (presence is checked
//!   in the handlers, not by serde, so a missing field yields a 400
//!   instead of a deserialization rejection)
//! - `Serialize` response shapes reproducing the historical wire
//!   contract exactly, field casing included

pub mod chat_message;
pub mod document;
pub mod member;
pub mod project;
pub mod task;
