use ferrous_doh_api::{create_doh_routes, AppState};
use std::net::SocketAddr;
use tracing::{info, warn};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        dns_query_url = %format!("http://{}/dns-query", bind_addr),
        resolve_url = %format!("http://{}/resolve", bind_addr),
        "Starting DoH server"
    );

    let app = create_doh_routes(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("DoH server started successfully");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
