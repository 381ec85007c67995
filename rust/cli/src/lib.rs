//! # Headsup CLI
//!
//! Terminal driver for the heads-up hold'em engine. The [`run`] entry point
//! parses arguments and dispatches to the subcommand handlers, writing to
//! injected output streams so tests can capture everything.
//!
//! ## Subcommands
//!
//! - `play`: play hands interactively against the automated opponent
//! - `sim`: run seeded bot-vs-bot simulations, recording JSONL histories
//! - `deal`: deal a single seeded hand for inspection
//! - `cfg`: display the resolved configuration
//!
//! ```no_run
//! use std::io;
//! let args = vec!["headsup", "deal", "--seed", "42"];
//! let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
mod ui;
pub mod validation;

use cli::{Commands, HeadsupCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};
pub use error::CliError;

/// Parses arguments and runs the selected subcommand.
///
/// Returns the process exit code: `0` for success, `2` for any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    return 0;
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: headsup <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    return 2;
                }
            }
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Play { hands, seed } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(hands, seed, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            output,
            seed,
        } => handle_sim_command(hands, output, seed, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}
