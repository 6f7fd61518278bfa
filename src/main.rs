mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "blog host failed");
        std::process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let server = ServerConfig::from_env()?;
    let (app, leptos_options) = routes::app()?;

    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    tracing::info!(addr = %server.addr(), site_root = %leptos_options.site_root, "blog listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
