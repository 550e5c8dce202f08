//! Olympiad front server.
//!
//! # Architecture Overview
//!
//! ```text
//!     config.toml ──▶ config ──▶ lifecycle::startup
//!                                   │
//!                                   ▼
//!          RouteTable ──▶ Router ──▶ App ◀── plugins (router, auto-animate)
//!                                   │
//!                                   ▼ mount("#app")
//!                               MountedApp
//!                                   │
//!     Browser ──▶ http server ──▶ render(location) ──▶ document
//!                     │
//!            assets, /healthz, /__routes
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use olympiad_front::app::RenderStatus;
use olympiad_front::config::{load_config, FrontConfig};
use olympiad_front::http::HttpServer;
use olympiad_front::lifecycle::{build_app, signals, Shutdown};
use olympiad_front::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "olympiad-front")]
#[command(about = "Front server for the olympiad single-page application", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the application (default)
    Serve {
        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the route table
    Routes,
    /// Render the document for a location and print it
    Render {
        /// Location to navigate to, e.g. "/favorites"
        location: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FrontConfig::default(),
    };

    logging::init(&config.observability.log_level);

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => serve(config, bind).await,
        Commands::Routes => {
            let app = build_app(&config)?;
            let router = app.router();
            for route in router.routes().iter() {
                println!(
                    "{:<14} {:<16} {}",
                    route.name,
                    route.path,
                    router.history().href(route.path)
                );
            }
            Ok(())
        }
        Commands::Render { location } => {
            let rendered = build_app(&config)?.render(&location);
            if rendered.status == RenderStatus::NotFound {
                return Err(format!("no route matches `{}`", location).into());
            }
            println!("{}", rendered.html);
            Ok(())
        }
    }
}

async fn serve(mut config: FrontConfig, bind: Option<String>) -> Result<(), Box<dyn Error>> {
    if let Some(bind) = bind {
        config.listener.bind_address = bind;
    }

    tracing::info!("olympiad-front v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        history = ?config.router.history,
        base = %config.router.base,
        mount_selector = %config.app.mount_selector,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Mount before accepting traffic
    let app = build_app(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    HttpServer::new(config, app).run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
