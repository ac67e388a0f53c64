pub mod cli;
pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hh-vacancies")]
#[command(about = "Search hh.ru vacancies and keep the interesting ones in a JSON file")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "hh-vacancies.toml")]
    pub config: String,

    /// Vacancies file, overrides storage.vacancies_file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Search endpoint, overrides api.endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(file) = &self.file {
            tracing::info!("🔧 Vacancies file overridden to: {}", file);
            config.storage.vacancies_file = file.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            tracing::info!("🔧 API endpoint overridden to: {}", endpoint);
            config.api.endpoint = endpoint.clone();
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = CliArgs::parse_from([
            "hh-vacancies",
            "--file",
            "saved/jobs.json",
            "--endpoint",
            "http://127.0.0.1:9000/vacancies",
        ]);
        let mut config = AppConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config.storage.vacancies_file, "saved/jobs.json");
        assert_eq!(config.api.endpoint, "http://127.0.0.1:9000/vacancies");
        assert_eq!(args.config, "hh-vacancies.toml");
    }
}
