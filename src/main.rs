use boston_globe_search::config::Config;
use boston_globe_search::mcp::Registry;
use boston_globe_search::router::create_app_router;
use boston_globe_search::widget::assets::locate_assets_directory;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialises the tracing subscriber. `RUST_LOG` wins over `level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(&config.log_level);

    // Assets are loaded before binding; a broken registry never serves.
    let assets_dir = config.assets_dir.clone().unwrap_or_else(|| {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        locate_assets_directory(&current_dir)
    });
    let registry = match Registry::from_assets_dir(&assets_dir) {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            error!(error = %e, "Failed to load widget assets");
            return ExitCode::FAILURE;
        }
    };

    let app = create_app_router(registry);

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Boston Globe search MCP server listening on http://{addr}/mcp"
    );

    match axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
