pub mod calculate;
mod job;

use clap::{Parser, Subcommand};

pub use self::calculate::{CalculateArgs, calculate};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate the contribution margin of a job order.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),
}
