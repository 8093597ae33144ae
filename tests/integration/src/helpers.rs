//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use roster_api::{create_app, create_app_state, create_app_state_with_store, serve, AppState};
use roster_common::AppConfig;
use roster_db::InMemoryStore;
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing store when the server runs in memory
    pub store: Option<InMemoryStore>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let store = InMemoryStore::new();
        let state = create_app_state_with_store(store.clone(), test_config())?;
        Self::start_with_state(state, Some(store)).await
    }

    /// Start a server backed by PostgreSQL at `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = AppConfig::from_env()?;
        config.database.run_migrations = true;
        let state = create_app_state(config).await?;
        Self::start_with_state(state, None).await
    }

    async fn start_with_state(state: AppState, store: Option<InMemoryStore>) -> Result<Self> {
        let app = create_app(state)?;

        // Port 0: the OS picks a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            handle,
        })
    }

    /// In-memory store behind this server
    ///
    /// # Panics
    /// Panics if the server was started against PostgreSQL.
    pub fn memory_store(&self) -> &InMemoryStore {
        self.store.as_ref().expect("server is not backed by the in-memory store")
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Configuration for in-memory test servers
pub fn test_config() -> AppConfig {
    let lookup = |key: &str| {
        let value = match key {
            "API_PORT" => "0",
            "DATABASE_URL" => "postgres://localhost/unused",
            "RATE_LIMIT_REQUESTS_PER_SECOND" => "1000",
            "RATE_LIMIT_BURST" => "1000",
            _ => return None,
        };
        Some(value.to_string())
    };
    match AppConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => panic!("static test configuration is invalid: {e}"),
    }
}

/// Helper to check if a PostgreSQL test environment is available
pub fn check_postgres_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
