//! HTTP handlers for bug CRUD.

pub mod bug;
pub use bug::*;
