//! `serve` command: run the HTTP server

use crate::config::ConfigLoader;
use crate::faq::FaqPipeline;
use crate::server::{self, AppState};
use crate::types::Result;

pub async fn run(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ConfigLoader::load()?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let pipeline = FaqPipeline::from_config(&config)?;
    server::run(AppState::new(pipeline), &config.server.bind_addr()).await
}
