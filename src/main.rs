//! Admin Color Manager - settings-driven colors for admin UI chrome
//!
//! This binary manages per-slot color overrides for the admin bar and admin
//! menu, and emits the stylesheet and client payloads a host page injects.

use admin_colors::cli::{
    CheckArgs, ClearArgs, FieldsArgs, GenerateArgs, SeedArgs, SetArgs, ShowArgs,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Admin Color Manager - settings-driven colors for admin UI chrome
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set a color slot to a hex value
    Set(SetArgs),
    /// Clear a color slot
    Clear(ClearArgs),
    /// Display slots with stored values and defaults
    Show(ShowArgs),
    /// Generate the stylesheet from stored settings
    Generate(GenerateArgs),
    /// Emit the client picker default-color payload
    Seed(SeedArgs),
    /// Emit form field descriptors for the host renderer
    Fields(FieldsArgs),
    /// Check whether a color value passes sanitization
    Check(CheckArgs),
}

fn main() {
    // Keep stdout clean for generated CSS/JSON; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Set(args) => args.execute(),
        Command::Clear(args) => args.execute(),
        Command::Show(args) => args.execute(),
        Command::Generate(args) => args.execute(),
        Command::Seed(args) => args.execute(),
        Command::Fields(args) => args.execute(),
        Command::Check(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
