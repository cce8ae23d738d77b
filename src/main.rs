use clap::Parser;
use freecycle_backend::app_data::AppData;
use freecycle_backend::cli::{self, Cli, Commands};
use freecycle_backend::config::{init_logging, ServerSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&SystemEnvironment)?;

    let mut settings = ServerSettings::from_env()?;
    let command = cli.command();
    if let Commands::Serve { bind: Some(bind_address) } = &command {
        settings = settings.with_bind_address(bind_address.as_str());
    }
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = AppData::init(settings);

    cli::execute_command(command, app_data).await
}
