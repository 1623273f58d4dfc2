use std::sync::Arc;

use domain::gateway::MailRelay;
use log::*;
use meeting_ai::traits::generation::Provider;
use service::config::Config;
use tokio::net::TcpListener;

mod controller;
mod error;
mod params;
mod response;
pub mod router;

pub use error::{Error, Result};

// Application state shared by every request handler.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    summary_provider: Arc<dyn Provider>,
    mail_relay: Arc<dyn MailRelay>,
}

impl AppState {
    pub fn new(
        config: Config,
        summary_provider: Arc<dyn Provider>,
        mail_relay: Arc<dyn MailRelay>,
    ) -> Self {
        Self {
            config,
            summary_provider,
            mail_relay,
        }
    }

    pub fn summary_provider(&self) -> &dyn Provider {
        self.summary_provider.as_ref()
    }

    pub fn mail_relay(&self) -> &dyn MailRelay {
        self.mail_relay.as_ref()
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let host = app_state.config.interface().to_string();
    let port = app_state.config.port;
    let server_url = format!("{host}:{port}");

    let listener = TcpListener::bind(&server_url).await?;

    info!("Server starting... listening for connections on http://{server_url}");

    axum::serve(listener, router::define_routes(app_state)).await
}
