use clap::Parser;
use mylib::domain::ports::ConfigProvider;
use mylib::utils::logger;
use mylib::{CalcEngine, CliConfig};

fn main() {
    let mut config = CliConfig::parse();

    // The log level may come from the config file, so load it first.
    if let Err(e) = config.load_file() {
        logger::init_cli_logger(config.verbose, None);
        tracing::error!("❌ Failed to load config: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    logger::init_cli_logger(config.verbose(), config.log_level());

    tracing::info!("Starting mylib CLI");
    match &config.config {
        Some(path) => tracing::debug!("Loading config from {}", path.display()),
        None => tracing::debug!("No config file, using defaults"),
    }
    tracing::debug!("CLI config: {:?}", config);

    let (operation, lhs, rhs) = config.command.operands();
    let engine = CalcEngine::new(config);

    match engine.run(operation, lhs, rhs) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {} failed: {}", operation, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
