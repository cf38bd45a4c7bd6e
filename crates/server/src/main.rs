mod bootstrap;
mod health;
mod routes;

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Result};
use babywear_core::config::{AppConfig, LoadOptions};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

fn init_logging(config: &AppConfig) {
    use babywear_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let drain_timeout = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    let router = routes::router(routes::AppState::new(app.service), &app.config.server);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "babywear-server listening"
    );

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    supervise(server, stop_tx, wait_for_shutdown(), drain_timeout).await?;

    info!(
        event_name = "system.server.stopped",
        correlation_id = "shutdown",
        "babywear-server stopped"
    );
    Ok(())
}

/// Waits for either a shutdown signal or the server task ending on its own.
/// On a signal the server is told to stop and given `drain_timeout` to finish.
async fn supervise<S>(
    mut server: JoinHandle<std::io::Result<()>>,
    stop_tx: oneshot::Sender<()>,
    shutdown: S,
    drain_timeout: Duration,
) -> Result<()>
where
    S: Future<Output = Result<()>>,
{
    tokio::select! {
        signal = shutdown => signal?,
        finished = &mut server => {
            error!(
                event_name = "system.server.exited_early",
                correlation_id = "shutdown",
                "http server stopped before a shutdown signal was received"
            );
            return match finished {
                Ok(Ok(())) => Err(anyhow!("http server exited before shutdown was requested")),
                Ok(Err(serve_error)) => Err(serve_error.into()),
                Err(join_error) => Err(join_error.into()),
            };
        }
    }

    info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        drain_timeout_secs = drain_timeout.as_secs(),
        "babywear-server draining in-flight requests"
    );
    let _ = stop_tx.send(());

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(Ok(Ok(()))) => Ok(()),
        Ok(Ok(Err(serve_error))) => {
            error!(
                event_name = "system.server.error",
                correlation_id = "shutdown",
                error = %serve_error,
                "http server terminated with an error"
            );
            Err(serve_error.into())
        }
        Ok(Err(join_error)) => Err(join_error.into()),
        Err(_) => {
            warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                "in-flight requests did not finish before the drain timeout"
            );
            Ok(())
        }
    }
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
