//! CLI command implementations.

mod check;
mod dump;
mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, SiteConfigFile, Validated};
use docnav_pages::{PageIndex, PageSet, SourcePages};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docnav.toml/json/yaml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Markdown source directory used to check links (overrides config).
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Treat dangling links as errors.
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Report dangling links as warnings.
    #[arg(long)]
    lenient: bool,

    /// Accept sidebar groups with no items.
    #[arg(long)]
    allow_empty_groups: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConfigArgs {
    fn cli_settings(&self) -> CliSettings {
        let strict = if self.strict {
            Some(true)
        } else if self.lenient {
            Some(false)
        } else {
            None
        };
        CliSettings {
            strict,
            allow_empty_groups: self.allow_empty_groups.then_some(true),
            pages_dir: self.pages_dir.clone(),
        }
    }

    /// Load the configuration and validate it, printing warnings.
    fn build(&self, output: &Output) -> Result<Validated, CliError> {
        let config = SiteConfigFile::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = config.config_path() {
            tracing::info!(path = %path.display(), "Using configuration");
        }

        let pages = config
            .pages_dir()
            .map(|dir| SourcePages::new(dir.to_path_buf()).scan())
            .transpose()?;
        if let Some(pages) = &pages {
            tracing::info!(pages = pages.len(), "Checking links against source pages");
        }

        let validated = config.build(pages.as_ref().map(|p: &PageSet| p as &dyn PageIndex))?;
        for warning in validated.warnings() {
            output.warn_diagnostic(warning);
        }
        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn settings(args: &[&str]) -> CliSettings {
        let cli = TestCli::parse_from(std::iter::once("docnav").chain(args.iter().copied()));
        cli.config.cli_settings()
    }

    #[test]
    fn test_no_flags_leaves_file_settings() {
        let settings = settings(&[]);

        assert_eq!(settings.strict, None);
        assert_eq!(settings.allow_empty_groups, None);
        assert_eq!(settings.pages_dir, None);
    }

    #[test]
    fn test_lenient_flag() {
        assert_eq!(settings(&["--lenient"]).strict, Some(false));
        assert_eq!(settings(&["--strict"]).strict, Some(true));
    }

    #[test]
    fn test_strict_and_lenient_conflict() {
        let result = TestCli::try_parse_from(["docnav", "--strict", "--lenient"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_pages_dir_and_empty_groups() {
        let settings = settings(&["--pages-dir", "docs", "--allow-empty-groups"]);

        assert_eq!(settings.pages_dir, Some(PathBuf::from("docs")));
        assert_eq!(settings.allow_empty_groups, Some(true));
    }
}
