//! `docnav sidebar` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to resolve (e.g., /guide/getting-started).
    path: String,

    #[command(flatten)]
    pub(crate) config: ConfigArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// Prints the resolved groups as JSON on stdout. A path no prefix covers
    /// prints an empty array.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let validated = self.config.build(&output)?;
        let sidebar = validated.model().sidebar();

        match sidebar.prefix_for(&self.path) {
            Some(prefix) => output.info(&format!("{} -> {prefix}", self.path)),
            None => output.warning(&format!("No sidebar prefix matches {}", self.path)),
        }
        output.json(&sidebar.resolve(&self.path))
    }
}
