//! `docnav dump` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the dump command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
}

impl DumpArgs {
    /// Execute the dump command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let validated = self.config.build(&output)?;
        output.json(validated.model())
    }
}
