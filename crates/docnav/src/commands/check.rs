//! `docnav check` command implementation.

use clap::Args;
use docnav_config::ConfigModel;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or validation reports blocking problems.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let validated = self.config.build(&output)?;

        let warnings = validated.warnings().len();
        if warnings > 0 {
            output.warning(&format!(
                "{warnings} warning{}",
                if warnings == 1 { "" } else { "s" }
            ));
        }
        output.success(&summary(validated.model()));
        Ok(())
    }
}

fn summary(model: &ConfigModel) -> String {
    let groups: usize = model.sidebar().iter().map(|s| s.groups().len()).sum();
    format!(
        "Configuration OK: \"{}\", {} nav entries, {} sidebar prefixes ({groups} groups), {} search",
        model.site().title,
        model.nav().len(),
        model.sidebar().len(),
        model.search().provider().as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_config::ValidationPolicy;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_summary() {
        let raw = json!({
            "title": "A2W: Lucas",
            "themeConfig": {
                "nav": [{ "text": "Guide", "link": "/guide/getting-started" }],
                "sidebar": {
                    "/guide/": [
                        { "text": "Introduction", "items": [{ "text": "Start", "link": "/guide/start" }] },
                        { "text": "Advanced", "items": [{ "text": "Slack", "link": "/guide/slack" }] }
                    ]
                }
            }
        });
        let validated = ConfigModel::build(&raw, &ValidationPolicy::default(), None).unwrap();

        assert_eq!(
            summary(validated.model()),
            "Configuration OK: \"A2W: Lucas\", 1 nav entries, 1 sidebar prefixes (2 groups), local search"
        );
    }
}
