use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repokeeper::config::{Config, ServeArgs};
use repokeeper::server;

#[derive(Parser)]
#[command(name = "repokeeper")]
#[command(about = "Applies branch protection and files an initial issue on new GitHub repositories")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repokeeper=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting repokeeper");

    let config = Config::from_env_and_args(cli.serve)?;
    server::run(config).await
}
