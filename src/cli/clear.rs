//! Clear command for color slots.

use crate::cli::common::{load_config, save_config, CliError, CliResult};
use crate::models::SlotKey;
use clap::Args;
use std::path::PathBuf;

/// Clear a color slot (reset to "no override")
#[derive(Debug, Clone, Args)]
pub struct ClearArgs {
    /// Color slot to clear (e.g. menu-background)
    #[arg(value_name = "SLOT")]
    pub slot: String,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ClearArgs {
    /// Execute the clear command
    pub fn execute(&self) -> CliResult<()> {
        let slot: SlotKey = self
            .slot
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let mut config = load_config(self.config.as_deref())?;
        config.store(slot, None);
        save_config(&config, self.config.as_deref())?;

        println!("✓ Cleared {slot}");
        Ok(())
    }
}
