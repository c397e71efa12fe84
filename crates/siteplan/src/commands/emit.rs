//! `siteplan emit` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::commands::SourceArgs;
use crate::error::CliError;

/// Arguments for the emit command.
#[derive(Args)]
pub struct EmitArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Write the JSON bundle to this file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl EmitArgs {
    /// Execute the emit command.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        let bundle = self.source.assemble()?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&bundle)?
        } else {
            serde_json::to_string(&bundle)?
        };

        match &self.out {
            Some(path) => std::fs::write(path, format!("{json}\n"))?,
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }

        Ok(())
    }
}
