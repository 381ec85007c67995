//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up no-limit hold'em against an automated opponent"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play hands interactively against the automated opponent
    Play {
        /// Number of hands to play (default 1)
        #[arg(long)]
        hands: Option<u32>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate bot-vs-bot hands, optionally recording JSONL histories
    Sim {
        /// Number of hands to simulate
        #[arg(long)]
        hands: u64,
        /// Hand-history output path (JSONL)
        #[arg(long)]
        output: Option<String>,
        /// Base RNG seed; hand N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a single seeded hand for inspection
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
