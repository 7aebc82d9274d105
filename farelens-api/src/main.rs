use std::net::SocketAddr;
use std::sync::Arc;

use farelens_api::supplier::{MockSupplier, SupplierClient};
use farelens_api::{app, AppState};
use farelens_core::airports::AirportDirectory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farelens_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = farelens_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting farelens API on port {}", config.server.port);

    let directory = Arc::new(AirportDirectory::bundled());
    tracing::info!("Airport directory loaded with {} airports", directory.len());

    let supplier: Arc<dyn SupplierClient> = Arc::new(MockSupplier::new(
        directory.clone(),
        config.supplier.max_offers,
        config.supplier.currency.clone(),
    ));

    let app_state = AppState::new(directory, supplier);
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
