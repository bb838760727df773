mod catalog;
mod config;
mod error;
mod model;
mod search;
mod server;
mod text;

#[cfg(test)]
mod test_fixtures;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use config::Config;
use server::LegalRemediesServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting legal-remedies MCP server");

    let config = Config::from_env()?;
    info!(
        catalog_path = config.catalog_path.as_deref().unwrap_or("bundled"),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let catalog = match config.catalog_file() {
        Some(path) => Catalog::from_file(&path)?,
        None => Catalog::bundled()?,
    };
    info!(
        origin = %catalog.origin(),
        fingerprint = %catalog.fingerprint(),
        remedies = catalog.remedies().len(),
        "catalog ready"
    );

    let server = LegalRemediesServer::new(Arc::new(catalog));

    if let Some(addr) = &config.tcp_listen_addr {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
