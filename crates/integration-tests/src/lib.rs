//! Integration tests for the Aroma Bills storefront.
//!
//! Each test starts the real router on an ephemeral port with a freshly
//! seeded, empty-store state, then talks to it over HTTP with `reqwest`.
//! No external services are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aroma-integration-tests
//! ```

use std::net::SocketAddr;

use aroma_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::Client;
use tokio::net::TcpListener;

/// A storefront running in the background of the current test runtime.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Absolute URL for a path such as `/catalog?sort=rating`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Start a storefront with default configuration.
///
/// # Panics
///
/// Panics if the listener cannot be bound or the catalog fails validation.
#[allow(clippy::expect_used)]
pub async fn spawn_storefront() -> TestServer {
    let state = AppState::seeded(StorefrontConfig::default()).expect("seeded catalog is valid");

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state)).await;
    });

    TestServer {
        base_url: format!("http://{addr}"),
        client: Client::new(),
    }
}
