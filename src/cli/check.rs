//! Check command for color values.

use crate::cli::common::{CliError, CliResult};
use crate::models::sanitize;
use clap::Args;

/// Check whether a color value would be kept or cleared by sanitization
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Color value to check
    #[arg(value_name = "COLOR")]
    pub color: String,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        match sanitize(&self.color) {
            Some(color) => {
                println!("✓ '{color}' is a valid hex color");
                Ok(())
            }
            None if self.color.is_empty() => {
                println!("✓ empty value (explicit unset)");
                Ok(())
            }
            None => Err(CliError::validation(format!(
                "'{}' is not a valid hex color and would be cleared",
                self.color
            ))),
        }
    }
}
