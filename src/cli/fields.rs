//! Fields command for form field descriptors.

use crate::cli::common::{load_config, resolve_variant, CliError, CliResult};
use crate::form::field_descriptors;
use clap::Args;
use std::path::PathBuf;

/// Emit the form field descriptors as JSON for the host settings renderer
#[derive(Debug, Clone, Args)]
pub struct FieldsArgs {
    /// Variant to describe (menu or admin-bar-menu); defaults to the
    /// configured one
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl FieldsArgs {
    /// Execute the fields command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let variant = resolve_variant(self.variant.as_deref(), &config)?;

        let fields = field_descriptors(variant, &config);
        let json = serde_json::to_string_pretty(&fields)
            .map_err(|e| CliError::io(format!("Failed to serialize fields: {e}")))?;
        println!("{json}");

        Ok(())
    }
}
