use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bartender_openai::client::OpenAiClient;
use bartender_openai::cocktail::CocktailGenerator;
use bartender_openai::prompt::TrainingCorpus;
use bartender_server::config::Config;
use bartender_server::state::AppState;
use bartender_storage::records::SqlStore;
use bartender_storage::{client, schema};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    let corpus = TrainingCorpus::load(&config.training_text_path).await?;
    let api = OpenAiClient::new(config.openai.clone())?;
    let generator = CocktailGenerator::new(Arc::new(api), corpus, config.engines.clone());

    let pool = client::connect(&config.storage).await?;
    schema::ensure_schema(&pool).await?;

    let state = AppState {
        generator,
        store: Arc::new(SqlStore::new(pool)),
    };

    let app = bartender_server::app(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "app running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
