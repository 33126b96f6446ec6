//! Shared domain types for the CollabHive backend.
//!
//! Holds the pieces both the database layer and the HTTP layer need:
//! ID/timestamp aliases, the domain error enum, and the request-value
//! coercion rules for task fields.

pub mod error;
pub mod tasks;
pub mod types;
