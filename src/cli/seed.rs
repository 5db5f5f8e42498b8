//! Seed command for the client picker payload.

use crate::cli::common::{load_config, resolve_variant, CliError, CliResult};
use crate::picker::PickerSeed;
use clap::Args;
use std::path::PathBuf;

/// Emit the default-color JSON payload for the client picker initializer
#[derive(Debug, Clone, Args)]
pub struct SeedArgs {
    /// Variant to seed for (menu or admin-bar-menu); defaults to the
    /// configured one
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SeedArgs {
    /// Execute the seed command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let variant = resolve_variant(self.variant.as_deref(), &config)?;

        let seed = PickerSeed::new(variant);
        let json = seed
            .to_json()
            .map_err(|e| CliError::io(format!("{e}")))?;
        println!("{json}");

        Ok(())
    }
}
