//! Bug tracker: in-memory bug records behind a small JSON REST API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, UpdatePolicy};
pub use error::{AppError, ConfigError};
pub use model::{Bug, BugPatch, NewBug, Status};
pub use response::MessageBody;
pub use routes::{app, bug_routes, common_routes, BUGS_PATH};
pub use service::{parse_new_bug, parse_patch, sanitize, BugValidator, ValidationReport};
pub use state::AppState;
pub use store::BugStore;
