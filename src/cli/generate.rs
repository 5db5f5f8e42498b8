//! Generate command for the admin stylesheet.

use crate::cli::common::{load_config, resolve_variant, CliError, CliResult};
use crate::constants::APP_NAME;
use crate::styles::generate_stylesheet;
use clap::Args;
use std::path::PathBuf;

/// Generate the stylesheet from the stored color settings
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Variant to generate for (menu or admin-bar-menu); defaults to the
    /// configured one
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Write the stylesheet to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Omit the generation banner for byte-stable output (for testing)
    #[arg(long)]
    pub deterministic: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let variant = resolve_variant(self.variant.as_deref(), &config)?;
        let scheme = config.scheme();

        let Some(css) = generate_stylesheet(variant, &scheme) else {
            println!("No colors set - nothing to generate.");
            return Ok(());
        };

        let output = if self.deterministic {
            css
        } else {
            let banner = format!(
                "/* Generated by {} on {} */\n\n",
                APP_NAME,
                chrono::Utc::now().to_rfc3339()
            );
            format!("{banner}{css}")
        };

        match &self.out {
            Some(path) => {
                std::fs::write(path, output)
                    .map_err(|e| CliError::io(format!("Failed to write stylesheet: {e}")))?;
                println!("✓ Generated stylesheet");
                println!("  Output: {}", path.display());
            }
            None => print!("{output}"),
        }

        Ok(())
    }
}
