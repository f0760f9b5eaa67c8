//! Run settings for gen-config.
//!
//! Settings can come from an optional YAML file and are then overridden by
//! command-line flags. Unknown YAML keys are ignored for forward
//! compatibility and every field has a default.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::RowErrorPolicy;
