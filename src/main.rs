use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkd::config::schema::{ListenerConfig, ServerConfig};
use checkd::lifecycle::{signals, LifecycleController, Shutdown};

#[derive(Parser)]
#[command(name = "checkd")]
#[command(about = "Minimal health-check HTTP server with graceful shutdown", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkd=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!(listen = %cli.listen, "checkd v0.1.0 starting");

    let config = ServerConfig {
        listener: ListenerConfig {
            bind_address: cli.listen,
            ..ListenerConfig::default()
        },
        ..ServerConfig::default()
    };

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let controller = LifecycleController::new(config, shutdown);
    let code = controller.run().await;

    std::process::exit(code);
}
