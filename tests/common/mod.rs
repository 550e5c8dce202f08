//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use olympiad_front::config::FrontConfig;
use olympiad_front::http::HttpServer;
use olympiad_front::lifecycle::{build_app, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A front server running on an ephemeral port.
pub struct RunningFront {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningFront {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Mount the application and serve it on 127.0.0.1 with an OS-assigned port.
pub async fn start_front(mut config: FrontConfig) -> RunningFront {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.metrics_enabled = false;

    let app = build_app(&config).expect("application should mount");
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, app);
    let handle = tokio::spawn(server.run(listener, shutdown.clone()));

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningFront { addr, shutdown, handle }
}

/// HTTP client that never pools or goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
