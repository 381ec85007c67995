//! Shows the resolved configuration and the source of each value.

use std::io::Write;

use crate::config::{self, ValueSource};
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  starting_stack = {} ({})",
        cfg.starting_stack,
        source_label(sources.starting_stack)
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed = {} ({})", seed, source_label(sources.seed))?,
        None => writeln!(out, "  seed = random ({})", source_label(sources.seed))?,
    }
    writeln!(
        out,
        "  provider = {} ({})",
        cfg.provider,
        source_label(sources.provider)
    )?;
    Ok(())
}

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}
