// src/cli/serve.rs

use crate::api;
use crate::infra::config::Config;

pub async fn run_serve(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    api::start_server(config, port).await?;
    Ok(())
}
