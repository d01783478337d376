//! Bug record and its typed inputs.

pub mod bug;
pub mod timestamp;

pub use bug::*;
