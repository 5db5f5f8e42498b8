//! Set command for color slots.

use crate::cli::common::{load_config, save_config, CliError, CliResult};
use crate::models::{sanitize, SlotKey};
use clap::Args;
use std::path::PathBuf;

/// Set a color slot to a hex value
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Color slot to set (e.g. menu-background)
    #[arg(value_name = "SLOT")]
    pub slot: String,

    /// Hex color value (#RGB or #RRGGBB); an empty value clears the slot
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SetArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let slot: SlotKey = self
            .slot
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let mut config = load_config(self.config.as_deref())?;

        match sanitize(&self.color) {
            Some(color) => {
                config.store(slot, Some(&color));
                save_config(&config, self.config.as_deref())?;
                println!("✓ Set {slot} to {color}");
            }
            None => {
                // Invalid input is downgraded to unset rather than raised
                // as an error; nothing malformed reaches generated CSS.
                config.store(slot, None);
                save_config(&config, self.config.as_deref())?;

                if self.color.is_empty() {
                    println!("✓ Cleared {slot}");
                } else {
                    tracing::warn!(slot = %slot, value = %self.color, "rejected invalid color");
                    eprintln!(
                        "Warning: '{}' is not a valid hex color; {slot} was cleared",
                        self.color
                    );
                }
            }
        }

        Ok(())
    }
}
