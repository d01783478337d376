//! Request-side rules: validation, sanitizing, and parsing raw bodies into typed inputs.

mod input;
mod sanitize;
mod validation;
pub use input::{body_to_map, parse_new_bug, parse_patch, RawBug};
pub use sanitize::sanitize;
pub use validation::{BugValidator, ValidationReport, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
