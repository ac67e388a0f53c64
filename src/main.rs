use clap::Parser;
use hh_vacancies::core::ConfigProvider;
use hh_vacancies::utils::error::exit_code;
use hh_vacancies::utils::{logger, validation::Validate};
use hh_vacancies::{AppConfig, AppError, CliArgs, HhClient, JsonFileStore, LocalStorage, Session};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Logging first, so config loading is traced too
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args).await {
        // Detailed record for the log
        tracing::error!("❌ Session failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // Short version for the user
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(e.severity()));
    }
}

async fn run(args: &CliArgs) -> Result<(), AppError> {
    // Load configuration, then apply command line overrides
    let mut config = AppConfig::load_or_default(&args.config)?;
    args.apply_overrides(&mut config);

    // Validate
    config.validate()?;
    tracing::debug!("Configuration: {:?}", config);

    // Create the API client and the vacancies store
    let client = HhClient::new(&config)?;
    let store = JsonFileStore::new(LocalStorage::new("."), config.vacancies_file());

    // Interactive session on the terminal
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        client,
        store,
        config.default_count(),
    );

    session.run().await?;
    Ok(())
}
