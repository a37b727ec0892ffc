use chrono::Local;
use sales_pacing::storage::{demo_logs, persist_logs, seed_demo_enabled};
use sales_pacing::{load_data, resolve_data_dir, router, AppState};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let mut data = load_data(&data_dir).await;
    if data.logs.is_empty() && seed_demo_enabled() {
        data.logs = demo_logs(Local::now().date_naive());
        persist_logs(&data_dir, &data.logs).await?;
        info!("seeded {} demo log records", data.logs.len());
    }
    info!(
        "loaded {} members, {} log records from {}",
        data.roster.members().len(),
        data.logs.len(),
        data_dir.display()
    );

    let app = router(AppState::new(data_dir, data));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
