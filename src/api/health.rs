use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::common::HealthResponse;
use crate::types::internal::timestamp;

/// Health check API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: timestamp::format(&timestamp::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let response = HealthApi.health().await;

        assert_eq!(response.status, "healthy");
        assert!(timestamp::parse("timestamp", &response.timestamp).is_ok());
    }
}
