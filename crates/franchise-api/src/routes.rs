// ============================================================================
// Franchise API - Router
// File: crates/franchise-api/src/routes.rs
// ============================================================================

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{branch, franchise, health, product};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/franchises", post(franchise::create_franchise))
        .route("/franchises/{franchise_id}/name", patch(franchise::update_franchise_name))
        .route("/franchises/{franchise_id}/branches", post(branch::add_branch))
        .route("/franchises/{franchise_id}/top-products", get(franchise::top_products))
        .route("/branches/{branch_id}/name", patch(branch::update_branch_name))
        .route("/branches/{branch_id}/products", post(product::add_product))
        .route("/products/{product_id}", delete(product::delete_product))
        .route("/products/{product_id}/stock", patch(product::update_product_stock))
        .route("/products/{product_id}/name", patch(product::update_product_name));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/db", get(health::db_health_check))
        .nest("/api", api_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use franchise_core::health::DbHealthPort;
    use franchise_core::usecases::{DbHealthUseCase, UseCases};
    use franchise_core::DomainError;
    use franchise_infrastructure::Store;

    fn app_with(store: Store) -> Router {
        build_router(AppState {
            use_cases: UseCases::new(store.gateway),
            db_health: DbHealthUseCase::new(store.health),
        })
    }

    fn app() -> Router {
        app_with(Store::in_memory())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, uri: &str, body: Value) -> String {
        let (status, value) = send(app, Method::POST, uri, Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{}", value);
        value["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_db_health_connected() {
        let app = app();
        create(&app, "/api/franchises", json!({"name": "KFC"})).await;

        let (status, body) = send(&app, Method::GET, "/health/db", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"connected": true, "collection": "franchises", "count": 1}));
    }

    struct DownStore;

    #[async_trait]
    impl DbHealthPort for DownStore {
        async fn count(&self) -> Result<u64, DomainError> {
            Err(DomainError::storage("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_db_health_disconnected() {
        let store = Store {
            health: Arc::new(DownStore),
            ..Store::in_memory()
        };

        let (status, body) = send(&app_with(store), Method::GET, "/health/db", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"connected": false, "error": "connection refused"}));
    }

    #[tokio::test]
    async fn test_create_franchise() {
        let (status, body) = send(&app(), Method::POST, "/api/franchises", Some(json!({"name": " KFC "}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "KFC");
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_error_bodies() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/api/franchises", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"status": 400, "message": "Franchise name must not be empty"}));

        create(&app, "/api/franchises", json!({"name": "KFC"})).await;
        let (status, body) = send(&app, Method::POST, "/api/franchises", Some(json!({"name": "KFC"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"status": 409, "message": "Franchise name already exists"}));

        let (status, body) = send(&app, Method::POST, "/api/franchises/missing/branches", Some(json!({"name": "Centro"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Franchise not found");
    }

    #[tokio::test]
    async fn test_product_routes() {
        let app = app();
        let franchise_id = create(&app, "/api/franchises", json!({"name": "KFC"})).await;
        let branch_id = create(&app, &format!("/api/franchises/{}/branches", franchise_id), json!({"name": "Centro"})).await;

        let (status, body) = send(&app, Method::POST, &format!("/api/branches/{}/products", branch_id), Some(json!({"name": "Burger"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stock"], 0);
        assert_eq!(body["branchId"], branch_id.as_str());
        let product_id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::POST, &format!("/api/branches/{}/products", branch_id), Some(json!({"name": "Fries", "stock": -1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Stock must be >= 0");

        let (status, body) = send(&app, Method::PATCH, &format!("/api/products/{}/stock", product_id), Some(json!({"stock": 42}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stock"], 42);

        let (status, body) = send(&app, Method::PATCH, &format!("/api/products/{}/name", product_id), Some(json!({"name": "Whopper"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Whopper");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/products/{}", product_id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::DELETE, &format!("/api/products/{}", product_id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_rename_routes() {
        let app = app();
        let franchise_id = create(&app, "/api/franchises", json!({"name": "OLD"})).await;
        let branch_id = create(&app, &format!("/api/franchises/{}/branches", franchise_id), json!({"name": "A"})).await;

        let (status, body) = send(&app, Method::PATCH, &format!("/api/franchises/{}/name", franchise_id), Some(json!({"name": "NEW"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "NEW");

        let (status, body) = send(&app, Method::PATCH, &format!("/api/branches/{}/name", branch_id), Some(json!({"name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "New branch name must not be empty");
    }

    #[tokio::test]
    async fn test_top_products_route() {
        let app = app();
        let franchise_id = create(&app, "/api/franchises", json!({"name": "KFC"})).await;
        let centro = create(&app, &format!("/api/franchises/{}/branches", franchise_id), json!({"name": "Centro"})).await;
        let norte = create(&app, &format!("/api/franchises/{}/branches", franchise_id), json!({"name": "Norte"})).await;
        create(&app, &format!("/api/branches/{}/products", centro), json!({"name": "Burger", "stock": 50})).await;
        create(&app, &format!("/api/branches/{}/products", centro), json!({"name": "Fries", "stock": 30})).await;

        let (status, body) = send(&app, Method::GET, &format!("/api/franchises/{}/top-products", franchise_id), None).await;
        assert_eq!(status, StatusCode::OK);

        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["branchId"], centro.as_str());
        assert_eq!(entries[0]["productName"], "Burger");
        assert_eq!(entries[0]["stock"], 50);
        assert_eq!(entries[1]["branchId"], norte.as_str());
        assert!(entries[1]["productId"].is_null());
        assert!(entries[1]["productName"].is_null());
        assert_eq!(entries[1]["stock"], 0);

        let (status, body) = send(&app, Method::GET, "/api/franchises/missing/top-products", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Franchise not found");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/franchises")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
