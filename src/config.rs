use std::path::PathBuf;

use tracing::warn;

use crate::cli::Cli;
use crate::error::Result;
use crate::state::{FoodCatalog, JsonFileStore, SessionId};

/// Default log directive; `--verbose` raises it to `info`.
pub const DEFAULT_LOG_DIRECTIVE: &str = "diet_plan_calc=warn";
pub const VERBOSE_LOG_DIRECTIVE: &str = "diet_plan_calc=info";

pub fn log_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_DIRECTIVE
    } else {
        DEFAULT_LOG_DIRECTIVE
    }
}

/// Settings shared by every subcommand, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub session: SessionId,
    pub verbose: bool,
}

impl AppConfig {
    /// Uses `--session` when given, otherwise the token remembered in the data directory.
    ///
    /// An unreadable or unwritable data directory yields a one-off token.
    pub fn from_cli(cli: &Cli) -> Self {
        let session = match cli.session.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => SessionId::new(token),
            _ => SessionId::load_or_create(&cli.data_dir).unwrap_or_else(|e| {
                warn!(
                    data_dir = %cli.data_dir.display(),
                    error = %e,
                    "could not keep session token, using a temporary one"
                );
                SessionId::generate()
            }),
        };

        Self {
            data_dir: cli.data_dir.clone(),
            catalog_path: cli.catalog.clone(),
            session,
            verbose: cli.verbose,
        }
    }

    pub fn log_directive(&self) -> &'static str {
        log_directive(self.verbose)
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir)
    }

    /// The catalog file if one was given, else the built-in foods.
    pub fn load_catalog(&self) -> Result<FoodCatalog> {
        match &self.catalog_path {
            Some(path) => FoodCatalog::load(path),
            None => Ok(FoodCatalog::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::service::NutritionService;
    use clap::Parser;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("diet_plan_calc").chain(args.iter().copied()))
    }

    #[test]
    fn test_explicit_session_wins() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();
        let cli = parse(&["--data-dir", &data_dir, "--session", "abc", "categories"]);
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.session.as_str(), "abc");
        assert!(!dir.path().join(crate::state::SESSION_FILE).exists());
    }

    #[test]
    fn test_session_remembered_between_runs() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();
        let first = AppConfig::from_cli(&parse(&["--data-dir", &data_dir]));
        let second = AppConfig::from_cli(&parse(&["--data-dir", &data_dir]));
        assert_eq!(first.session, second.session);
    }

    #[test]
    fn test_unwritable_data_dir_still_calculates() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let data_dir = file.path().to_string_lossy().to_string();
        let cli = parse(&[
            "--data-dir",
            &data_dir,
            "calculate",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "30",
            "--gender",
            "male",
            "--activity",
            "sedentary",
        ]);

        let config = AppConfig::from_cli(&cli);
        assert!(!config.session.as_str().is_empty());

        let Some(Command::Calculate(args)) = &cli.command else {
            panic!("expected calculate");
        };
        let service = NutritionService::new(config.store(), config.session.clone());
        let profile = service.calculate(&args.to_request()).unwrap();
        assert_eq!(profile.metrics.bmr, 1649);
    }

    #[test]
    fn test_log_directive_and_seed_catalog() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();
        let config = AppConfig::from_cli(&parse(&["--data-dir", &data_dir, "--session", "s", "-v"]));
        assert_eq!(config.log_directive(), VERBOSE_LOG_DIRECTIVE);
        assert_eq!(config.load_catalog().unwrap().len(), 12);
    }
}
