// CLI module - command line entry points for the server binary

use std::sync::Arc;

use clap::{Parser, Subcommand};
use poem::listener::TcpListener;
use poem::Server;

use crate::api;
use crate::app_data::AppData;
use crate::config::ConfigSpec;

/// Freecycle items server
#[derive(Parser, Debug)]
#[command(name = "freecycle")]
#[command(about = "Prototype REST API for sharing and finding free items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (the default when no command is given)
    Serve {
        /// host:port to listen on, overrides SERVER_BIND
        #[arg(long, value_parser = parse_bind_address)]
        bind: Option<String>,
    },

    /// Print the OpenAPI document as JSON and exit
    Openapi,
}

fn parse_bind_address(value: &str) -> Result<String, String> {
    ConfigSpec::validate_host_port(value)?;
    Ok(value.to_string())
}

impl Cli {
    /// The command to run, falling back to `serve`
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve { bind: None })
    }
}

/// Execute CLI command
///
/// # Arguments
/// * `command` - Command to run
/// * `app_data` - Application data containing the store and settings
pub async fn execute_command(
    command: Commands,
    app_data: AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { .. } => serve(app_data).await?,
        Commands::Openapi => {
            println!("{}", api::api_service(&app_data).spec());
        }
    }
    Ok(())
}

/// Run the server until Ctrl-C
async fn serve(app_data: AppData) -> Result<(), std::io::Error> {
    let bind_address = app_data.settings.bind_address().to_string();
    let public_url = app_data.settings.public_url().to_string();
    let app = api::build_app(Arc::new(app_data));

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);

    Server::new(TcpListener::bind(bind_address))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await
}
