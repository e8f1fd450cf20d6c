use colored::Colorize;
use goog_routes::config::{Config, LOG_CONFIG_FILE};
use goog_routes::logging::init_logging;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging(LOG_CONFIG_FILE)?;
    log::info!("#Start main()");

    let config = Config::default();
    let client = reqwest::Client::new();

    if let Err(e) = goog_routes::run(&config, &client, std::io::stdout().lock()).await {
        log::error!("{} {e}", "fatal:".on_red());
        std::process::exit(1);
    }

    Ok(())
}
