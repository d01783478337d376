//! Request extractors that turn bad input into `{ "message": ... }` responses.

pub mod bug_id;
pub mod json;

pub use bug_id::BugId;
pub use json::{JsonBody, JsonObject};
