use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use usuarios_api::{config, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usuarios_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    if let Err(e) = server::run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
