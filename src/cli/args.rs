//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Create a new GitHub repository using the gh CLI
#[derive(Parser, Debug)]
#[command(name = "repo-create")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization name
    #[arg(long, required_unless_present_any = ["generator", "show_config"])]
    pub org: Option<String>,

    /// Repository name
    #[arg(long, required_unless_present_any = ["generator", "show_config"])]
    pub name: Option<String>,

    /// Repository description
    #[arg(long)]
    pub description: Option<String>,

    /// Make the repository private
    #[arg(long)]
    pub private: bool,

    /// Clone the repository after creation
    #[arg(long)]
    pub clone: bool,

    /// Print the gh invocation instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Additional config file layered over the global one
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
