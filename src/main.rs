use std::sync::Arc;

use domain::gateway::{gemini::GeminiClient, smtp::SmtpRelay};
use log::*;
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting up Meeting Summarizer API");

    let missing = config.missing_env_vars();
    if !missing.is_empty() {
        warn!("Missing environment variables: {}", missing.join(", "));
        warn!("Some features may not work properly");
    }

    let summary_provider = match GeminiClient::new(&config) {
        Ok(client) => {
            info!("Summaries will be generated with model {}", client.model());
            Arc::new(client)
        }
        Err(e) => {
            error!("Failed to configure the Gemini client: {e}");
            std::process::exit(1);
        }
    };

    let mail_relay = match SmtpRelay::new(&config) {
        Ok(relay) => Arc::new(relay),
        Err(e) => {
            error!("Failed to configure the mail relay: {e}");
            std::process::exit(1);
        }
    };

    let app_state = web::AppState::new(config, summary_provider, mail_relay);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
