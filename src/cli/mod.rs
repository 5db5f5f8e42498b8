//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the color settings
//! for automation, testing, and host-page integration.

pub mod check;
pub mod clear;
pub mod common;
pub mod fields;
pub mod generate;
pub mod seed;
pub mod set;
pub mod show;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use clear::ClearArgs;
pub use common::{CliError, CliResult};
pub use fields::FieldsArgs;
pub use generate::GenerateArgs;
pub use seed::SeedArgs;
pub use set::SetArgs;
pub use show::ShowArgs;
