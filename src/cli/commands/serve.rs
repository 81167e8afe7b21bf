use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::initialize_app_state;
use crate::router::create_router;

/// Start the web server
pub async fn run(database_url: &str, bind_address: &str) -> Result<()> {
    info!("EcoGuide application starting up");

    let state = initialize_app_state(database_url).await?;
    let app = create_router(state);

    info!("Starting server on {}", bind_address);
    let listener = TcpListener::bind(bind_address).await?;

    info!("EcoGuide API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
