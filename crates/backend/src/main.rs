pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let port = config.server.port;

    let cwd = std::env::current_dir()?;
    let dirs = config.static_files.rooted_at(&cwd);
    tracing::info!(
        "Serving {} (public: {}, node_modules: {})",
        dirs.dist_dir.display(),
        dirs.public_dir.display(),
        dirs.node_modules_dir.display()
    );
    if !dirs.index_html().exists() {
        tracing::warn!(
            "{} is missing, GET / will answer 404 until the frontend is built",
            dirs.index_html().display()
        );
    }

    let app = routes::configure_routes(&dirs);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Set PORT or stop the other process.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        "==> Listening on port {}. Visit http://localhost:{}/ in your browser.",
        port,
        port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
