//! HTTP API handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    backend_configured: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            backend_configured: config.backend_url.is_some(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub backend_configured: bool,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "vetclinic-web",
        version: env!("VETCLINIC_VERSION"),
        git_sha: env!("VETCLINIC_GIT_SHA"),
        uptime_secs: state.uptime_secs(),
        backend_configured: state.backend_configured,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tracks_backend_presence() {
        let without = AppState::new(&Config::default());
        assert!(!without.backend_configured);

        let config = Config {
            backend_url: Some("http://localhost:4000".into()),
            ..Config::default()
        };
        let with = AppState::new(&config);
        assert!(with.backend_configured);
    }

    #[tokio::test]
    async fn test_status_handler_reports_service() {
        let state = AppState::new(&Config::default());
        let Json(status) = status_handler(State(state)).await;
        assert_eq!(status.service, "vetclinic-web");
        assert!(!status.backend_configured);
    }
}
