//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with the trusted identity header.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use matchday_api::{create_app, create_app_state};
use matchday_common::{AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ServerConfig};
use matchday_core::entities::UserRole;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Check whether the test environment is configured. Integration tests need
/// a running PostgreSQL instance reachable via TEST_DATABASE_URL (or
/// DATABASE_URL); without one they are skipped.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    if test_database_url().is_none() {
        eprintln!("Skipping integration test: TEST_DATABASE_URL/DATABASE_URL not set");
        return false;
    }
    true
}

fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

/// Build an AppConfig for tests
pub fn test_config() -> Result<AppConfig> {
    let url = test_database_url()
        .ok_or_else(|| anyhow::anyhow!("TEST_DATABASE_URL/DATABASE_URL not set"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "matchday-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config.
    ///
    /// The monitoring scheduler is NOT auto-started here: tests drive it
    /// explicitly through the diagnostics endpoints.
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serialize an identity for the trusted header
    fn identity_header(user_id: i64, role: UserRole) -> String {
        format!(r#"{{"id": {user_id}, "role": "{role}"}}"#)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with an identity header
    pub async fn get_as(&self, path: &str, user_id: i64, role: UserRole) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("x-user-data", Self::identity_header(user_id, role))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with an empty body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    /// Make a POST request with an identity header
    pub async fn post_as<T: Serialize>(
        &self,
        path: &str,
        user_id: i64,
        role: UserRole,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("x-user-data", Self::identity_header(user_id, role))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with an identity header
    pub async fn patch_as<T: Serialize>(
        &self,
        path: &str,
        user_id: i64,
        role: UserRole,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("x-user-data", Self::identity_header(user_id, role))
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with an identity header
    pub async fn delete_as(&self, path: &str, user_id: i64, role: UserRole) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("x-user-data", Self::identity_header(user_id, role))
            .send()
            .await?)
    }
}

/// Assert a response has the expected status code
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert a response status and deserialize its JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected {
        anyhow::bail!("expected status {expected}, got {status}: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
