//! Show command for current settings.

use crate::cli::common::{load_config, resolve_variant, CliError, CliResult};
use crate::form::field_descriptors;
use clap::Args;
use std::path::PathBuf;

/// Display the slots of the active variant with stored values and defaults
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Variant to display (menu or admin-bar-menu); defaults to the
    /// configured one
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let variant = resolve_variant(self.variant.as_deref(), &config)?;
        let fields = field_descriptors(variant, &config);

        if self.json {
            let json = serde_json::to_string_pretty(&fields)
                .map_err(|e| CliError::io(format!("Failed to serialize settings: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Color settings (variant: {variant})");
        println!();

        for field in fields {
            let value = if field.value.is_empty() {
                "(unset)".to_string()
            } else {
                field.value
            };
            println!(
                "  {:<24} {:<10} default {}",
                field.key.to_string(),
                value,
                field.default_color
            );
        }

        Ok(())
    }
}
