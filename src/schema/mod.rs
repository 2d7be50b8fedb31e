//! Schema module - Configuration and seeding types for universe runs.

mod config;
pub mod patterns;
mod seed;

pub use config::*;
pub use seed::*;
