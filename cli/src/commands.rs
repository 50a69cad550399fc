pub mod show;
pub mod subnet;
pub mod teredo;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "v6addr")]
#[command(about = "Inspect and convert IPv6 address notations.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print less (-q hides headers, -qq hides details)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Log why an address was rejected
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show every representation of an address
    #[command(alias = "s")]
    Show { address: String },
    /// Check whether two addresses share a subnet
    #[command(alias = "n")]
    Subnet { address: String, other: String },
    /// Decode the fields of a Teredo address
    #[command(alias = "t")]
    Teredo { address: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
