//! Request handlers, one submodule per resource.
//!
//! Handlers validate field presence, delegate to the corresponding
//! repository in `collabhive-db`, and map errors via
//! [`crate::error::AppError`]. No business rule beyond presence and
//! type coercion is enforced here.

pub mod document;
pub mod member;
pub mod message;
pub mod project;
pub mod task;
