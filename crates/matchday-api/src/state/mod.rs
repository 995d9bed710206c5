//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the monitoring scheduler, and configuration.

use std::sync::Arc;

use matchday_common::AppConfig;
use matchday_service::{MonitoringScheduler, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// The process-wide monitoring scheduler instance
    scheduler: Arc<MonitoringScheduler>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: Arc<ServiceContext>,
        scheduler: Arc<MonitoringScheduler>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context,
            scheduler,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the monitoring scheduler
    pub fn scheduler(&self) -> &MonitoringScheduler {
        &self.scheduler
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("scheduler", &"MonitoringScheduler")
            .field("config", &"AppConfig")
            .finish()
    }
}
