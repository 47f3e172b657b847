//! Discovery document for the API root

use std::collections::BTreeMap;

use axum::Json;
use domain::LOCALITIES;
use serde::Serialize;

/// Discovery response: every path the service exposes
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResponse {
    pub message: String,
    /// Locality display name (or `health`) to path
    pub endpoints: BTreeMap<String, String>,
}

/// Root endpoint listing the health path and one path per locality
pub async fn discovery() -> Json<DiscoveryResponse> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("health".to_string(), "/api/health".to_string());
    for locality in &LOCALITIES {
        endpoints.insert(locality.name().to_string(), locality.route_path());
    }

    Json(DiscoveryResponse {
        message: format!("Formosa Weather v{}", env!("CARGO_PKG_VERSION")),
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn discovery_lists_health_and_every_locality() {
        let response = discovery().await;
        assert_eq!(response.endpoints.len(), LOCALITIES.len() + 1);
        assert_eq!(
            response.endpoints.get("health").map(String::as_str),
            Some("/api/health")
        );
        assert_eq!(
            response.endpoints.get("臺北市").map(String::as_str),
            Some("/api/weather/taipei-city")
        );
    }

    #[tokio::test]
    async fn discovery_message_carries_version() {
        let response = discovery().await;
        assert!(response.message.contains(env!("CARGO_PKG_VERSION")));
    }
}
