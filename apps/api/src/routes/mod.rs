pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::certificates::handlers as certificates;
use crate::experiences::handlers as experiences;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;
use crate::talents::handlers as talents;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Talents
        .route(
            "/api/v1/talents",
            get(talents::handle_list_talents).post(talents::handle_create_talent),
        )
        .route("/api/v1/talents/filter", post(talents::handle_filter_talents))
        .route("/api/v1/talents/search", get(talents::handle_search_talents))
        .route(
            "/api/v1/talents/:id",
            get(talents::handle_get_talent)
                .patch(talents::handle_update_talent)
                .delete(talents::handle_delete_talent),
        )
        .route("/api/v1/talents/:id/profile", get(talents::handle_get_profile))
        // Work experience
        .route(
            "/api/v1/talents/:id/experiences",
            get(experiences::handle_list_experiences).post(experiences::handle_create_experience),
        )
        .route(
            "/api/v1/experiences/:id",
            get(experiences::handle_get_experience)
                .patch(experiences::handle_update_experience)
                .delete(experiences::handle_delete_experience),
        )
        // Certificates
        .route(
            "/api/v1/talents/:id/certificates",
            get(certificates::handle_list_certificates)
                .post(certificates::handle_create_certificate),
        )
        .route(
            "/api/v1/certificates/:id",
            get(certificates::handle_get_certificate)
                .patch(certificates::handle_update_certificate)
                .delete(certificates::handle_delete_certificate),
        )
        // Recommendations
        .route(
            "/api/v1/talents/:id/recommendations",
            get(recommendations::handle_list_recommendations)
                .post(recommendations::handle_create_recommendation),
        )
        .route(
            "/api/v1/recommendations/:id",
            get(recommendations::handle_get_recommendation)
                .patch(recommendations::handle_update_recommendation)
                .delete(recommendations::handle_delete_recommendation),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::models::talent::fixtures::make_talent;
    use crate::models::talent::Talent;
    use crate::talents::store::memory::InMemoryTalentStore;

    fn make_state(talents: Vec<Talent>) -> AppState {
        // Never connected: talent routes only go through the in-memory store.
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/talent_pool_test")
            .unwrap();
        AppState {
            db,
            talents: Arc::new(InMemoryTalentStore::with(talents)),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(make_state(vec![]));
        let (status, body) = send(app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_talent_returns_201_envelope() {
        let app = build_router(make_state(vec![]));
        let body = json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "jane@example.com",
            "location": "CA",
            "skills": ["Python"],
            "price": 40.0
        });
        let (status, json) = send(app, json_request("POST", "/api/v1/talents", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["first_name"], "Jane");
        assert_eq!(json["errors"], json!([]));
    }

    #[tokio::test]
    async fn test_create_talent_with_bad_email_is_400() {
        let app = build_router(make_state(vec![]));
        let body = json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "jane",
            "location": "CA"
        });
        let (status, json) = send(app, json_request("POST", "/api/v1/talents", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_filter_route_end_to_end() {
        let app = build_router(make_state(vec![
            make_talent("John", "Doe", "Java", "NY", 75.0),
            make_talent("Jane", "Smith", "Python", "CA", 40.0),
        ]));
        let criteria = json!({
            "name": "john",
            "skills": ["Java"],
            "price_range": [50, 100]
        });
        let (status, json) =
            send(app, json_request("POST", "/api/v1/talents/filter", criteria)).await;
        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["last_name"], "Doe");
    }

    #[tokio::test]
    async fn test_filter_route_empty_result_is_404() {
        let app = build_router(make_state(vec![make_talent("John", "Doe", "Java", "NY", 75.0)]));
        let criteria = json!({ "preferred_locations": ["CA"] });
        let (status, json) =
            send(app, json_request("POST", "/api/v1/talents/filter", criteria)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_search_route_parses_query_string() {
        let app = build_router(make_state(vec![
            make_talent("John", "Doe", "Java", "NY", 75.0),
            make_talent("Rob", "Pike", "Go", "CA", 120.0),
            make_talent("Jane", "Smith", "Python", "CA", 40.0),
        ]));
        let (status, json) = send(
            app,
            get_request("/api/v1/talents/search?skills=java,go&min_price=50&max_price=100"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["first_name"], "John");
    }

    #[tokio::test]
    async fn test_patch_route_merges_fields() {
        let talent = make_talent("John", "Doe", "Java", "NY", 75.0);
        let id = talent.id;
        let app = build_router(make_state(vec![talent]));
        let (status, json) = send(
            app,
            json_request(
                "PATCH",
                &format!("/api/v1/talents/{id}"),
                json!({ "first_name": "Jane", "preferred_locations": [] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["first_name"], "Jane");
        assert_eq!(json["data"]["email"], "john.doe@example.com");
        assert_eq!(json["data"]["preferred_locations"], json!([]));
    }

    #[tokio::test]
    async fn test_patch_with_mistyped_field_is_400_envelope() {
        let talent = make_talent("John", "Doe", "Java", "NY", 75.0);
        let id = talent.id;
        let app = build_router(make_state(vec![talent]));
        let (status, json) = send(
            app,
            json_request("PATCH", &format!("/api/v1/talents/{id}"), json!({ "price": "abc" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_patch_trims_email() {
        let talent = make_talent("John", "Doe", "Java", "NY", 75.0);
        let id = talent.id;
        let app = build_router(make_state(vec![talent]));
        let (status, json) = send(
            app,
            json_request(
                "PATCH",
                &format!("/api/v1/talents/{id}"),
                json!({ "email": " jane@example.com ", "first_name": "Jane " }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["email"], "jane@example.com");
        assert_eq!(json["data"]["first_name"], "Jane");
    }

    #[tokio::test]
    async fn test_malformed_id_is_400_envelope() {
        let app = build_router(make_state(vec![]));
        let (status, json) = send(app, get_request("/api/v1/talents/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_with_non_numeric_price_is_400_envelope() {
        let app = build_router(make_state(vec![make_talent("John", "Doe", "Java", "NY", 75.0)]));
        let (status, json) = send(app, get_request("/api/v1/talents/search?min_price=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_profile_for_unknown_talent_is_404() {
        let app = build_router(make_state(vec![]));
        let (status, json) = send(
            app,
            get_request(&format!("/api/v1/talents/{}/profile", Uuid::new_v4())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_child_list_with_malformed_talent_id_is_400() {
        let app = build_router(make_state(vec![]));
        let (status, json) =
            send(app, get_request("/api/v1/talents/42/experiences")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_unknown_talent_is_404() {
        let app = build_router(make_state(vec![]));
        let (status, json) =
            send(app, get_request(&format!("/api/v1/talents/{}", Uuid::new_v4()))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["errors"][0]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_talent_returns_204() {
        let talent = make_talent("John", "Doe", "Java", "NY", 75.0);
        let id = talent.id;
        let app = build_router(make_state(vec![talent]));
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/talents/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_child_create_for_unknown_talent_is_404() {
        let app = build_router(make_state(vec![]));
        let body = json!({
            "author_name": "Grace Hopper",
            "content": "Excellent engineer."
        });
        let (status, _) = send(
            app,
            json_request(
                "POST",
                &format!("/api/v1/talents/{}/recommendations", Uuid::new_v4()),
                body,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
