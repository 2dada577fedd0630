//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use web_skeleton::config::{AppConfig, Environment};
use web_skeleton::http::HttpServer;
use web_skeleton::lifecycle::Shutdown;

/// Spawn the application on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// does not stop the server, call `trigger`.
pub async fn spawn_app(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Development-mode config with the redirect stage off, so plain HTTP
/// requests reach dispatch.
#[allow(dead_code)]
pub fn dev_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = Environment::Development;
    config.https_redirect.enabled = false;
    config
}

/// Production-mode config with the redirect stage left on.
#[allow(dead_code)]
pub fn prod_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = Environment::Production;
    config
}

/// Client that does not follow redirects, so Location headers can be
/// asserted directly.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
