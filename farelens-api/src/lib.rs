use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod error;
pub mod history;
pub mod offers;
pub mod saved;
pub mod state;
pub mod supplier;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(offers::routes())
        .merge(saved::routes())
        .merge(history::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplier::{MockSupplier, SupplierClient};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use farelens_core::airports::AirportDirectory;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let directory = Arc::new(AirportDirectory::bundled());
        let supplier: Arc<dyn SupplierClient> =
            Arc::new(MockSupplier::new(directory.clone(), 5, "EUR".to_string()));
        app(AppState::new(directory, supplier))
    }

    #[tokio::test]
    async fn test_search_endpoint_end_to_end() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/offers")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"origin":"MAD","destination":"BCN","departureDate":"2025-08-01","passengers":1}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["offers"].as_array().unwrap().len(), 5);
        assert!(body["stats"]["max"].as_f64().unwrap() >= body["stats"]["min"].as_f64().unwrap());
        let first = &body["offers"][0];
        assert!(first["dealScore"].as_u64().unwrap() <= 100);
        assert_eq!(first["origin"]["iata"], "MAD");
        // Display fields ride alongside the raw offer.
        assert!(first["durationDisplay"].as_str().unwrap().ends_with('m'));
        assert!(!first["stopsDisplay"].as_str().unwrap().is_empty());
        assert!(!first["flightNumbers"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_missing_origin_is_400() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/offers")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"origin":"","departureDate":"2025-08-01"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_saved_endpoints_round_trip() {
        let app = test_app();

        // Search, take the first offer, save it.
        let search = Request::builder()
            .method("POST")
            .uri("/api/offers")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"origin":"MAD","destination":"LHR","departureDate":"2025-08-01"}"#,
            ))
            .unwrap();
        let response = app.clone().oneshot(search).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let offer = body["offers"][0].clone();

        let save = Request::builder()
            .method("POST")
            .uri("/api/saved")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "offer": offer }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let list = Request::builder()
            .method("GET")
            .uri("/api/saved")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(list).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let saved: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(saved.as_array().unwrap().len(), 1);
        assert_eq!(saved[0]["id"], offer["id"]);
    }
}
