//! Handler modules for the dispatcher schema

pub mod commands;
pub mod inline;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
