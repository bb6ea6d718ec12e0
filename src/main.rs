use clap::Parser;
use tracing::error;

use tinker::adapter::cli::{self, Cli};
use tinker::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = cli::execute(cli, &config).await {
        cli::output::error(&e.to_string());
        error!(error = %e, "command failed");
        std::process::exit(1);
    }
}
