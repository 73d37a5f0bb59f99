use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// The fixed port the static file server binds to.
pub const PORT: u16 = 8000;

/// Serve `dir` as static files on `0.0.0.0:<port>`. Blocks until the server
/// errors or the process is terminated.
///
/// CORS is permissive so the graph artifact can be fetched from visualization
/// pages hosted elsewhere.
pub async fn serve(dir: &Path, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Synchronous wrapper for the CLI: builds a tokio runtime and blocks on
/// [`serve`] for the server's whole lifetime.
pub fn serve_blocking(dir: &Path, port: u16) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(dir, port))
}
