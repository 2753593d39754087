//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive portfolio terminal
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Interactive portfolio terminal", long_about = None)]
pub struct Args {
    /// Terminal config file (TOML)
    #[arg(long, value_name = "FILE", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Profile file (TOML or JSON); the builtin profile when unset
    #[arg(long, value_name = "FILE", env = "FOLIO_PROFILE")]
    pub profile: Option<String>,

    /// Submit stdin line by line and print plain text, even on a TTY
    #[arg(long)]
    pub plain: bool,
}
