//! `siteplan check` command implementation.

use clap::Args;

use crate::commands::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first violated invariant; the caller
    /// turns this into a non-zero exit.
    pub fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let bundle = self.source.assemble()?;

        let config = &bundle.config;
        let sidebar = &bundle.sidebar;

        output.success(&format!("{}: configuration is valid", config.site.title));
        output.info(&format!(
            "sidebar \"{}\": {} documents",
            sidebar.name(),
            sidebar.doc_count()
        ));
        output.info(&format!(
            "links: {} navbar, {} footer columns",
            config.navbar.len(),
            config.footer.columns.len()
        ));
        output.info(&format!("locales: {}", config.i18n.locales.join(", ")));

        Ok(())
    }
}
