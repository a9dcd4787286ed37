//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                   GET     health check
//! - /text/save              POST    save a new text (?lines=N, default 2)
//! - /text/find/content      GET     texts containing a fragment
//! - /text/find              GET     all texts
//! - /text/find/{id}         GET     one text by id
//! - /text/update/{id}       PUT     replace a text (?lines=N, 1..=10)
//! - /text/delete/{id}       DELETE  remove a text by id

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/text", text_routes())
}

/// Text routes
fn text_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(handlers::save_text))
        .route("/find/content", get(handlers::find_by_content))
        .route("/find", get(handlers::find_all))
        .route("/find/:id", get(handlers::find_by_id))
        .route("/update/:id", put(handlers::update_text))
        .route("/delete/:id", delete(handlers::delete_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::{Summarizer, TextService};
    use crate::config::TextConfig;
    use crate::infrastructure::adapters::SrxSentenceDetector;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTextRepository,
    };

    async fn app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repository = Arc::new(SqliteTextRepository::new(pool));

        let xml = include_str!("../../../resources/pt-sent.srx");
        let detector = Arc::new(SrxSentenceDetector::from_xml(xml, "pt").unwrap());
        let summarizer = Summarizer::new(detector);

        let service = TextService::new(repository, summarizer);
        let state = Arc::new(AppState::new(service, TextConfig::default()));

        create_routes().with_state(state)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn save(app: &Router, text: &str, lines: Option<u32>) -> Value {
        let uri = match lines {
            Some(n) => format!("/text/save?lines={}", n),
            None => "/text/save".to_string(),
        };
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, &uri, json!({ "text": text })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response_json(response).await
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app().await;
        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_save_returns_record_with_summary() {
        let app = app().await;

        let body = save(&app, "Frase um. Frase dois. Frase três.", Some(2)).await;
        assert!(body["id"].as_i64().unwrap() >= 1);
        assert_eq!(body["text"], "Frase um. Frase dois. Frase três.");
        assert_eq!(body["textReduced"], "Frase um. Frase dois.");
    }

    #[tokio::test]
    async fn test_save_defaults_to_two_lines() {
        let app = app().await;

        let body = save(&app, "Primeira. Segunda. Terceira.", None).await;
        assert_eq!(body["textReduced"], "Primeira. Segunda.");
    }

    #[tokio::test]
    async fn test_save_duplicate_is_rejected() {
        let app = app().await;
        save(&app, "Texto repetido.", Some(1)).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/text/save?lines=1",
                json!({ "text": "Texto repetido." }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Texto já existe no banco de dados.");
    }

    #[tokio::test]
    async fn test_save_blank_text_is_rejected() {
        let app = app().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/text/save",
                json!({ "text": "   " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["details"][0]["field"], "text");
        assert_eq!(body["details"][0]["message"], "Texto não pode ser vazio");
    }

    #[tokio::test]
    async fn test_save_invalid_characters_are_rejected() {
        let app = app().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/text/save",
                json!({ "text": "olá; mundo" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(
            body["details"][0]["message"],
            "O texto contém caracteres inválidos"
        );
    }

    #[tokio::test]
    async fn test_find_by_id_roundtrip_and_missing() {
        let app = app().await;
        let saved = save(&app, "Um texto salvo.", Some(1)).await;
        let id = saved["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/text/find/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["text"], "Um texto salvo.");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/text/find/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_find_all_lists_records() {
        let app = app().await;
        save(&app, "Primeiro texto.", Some(1)).await;
        save(&app, "Segundo texto.", Some(1)).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/text/find")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_content_matches_case_insensitively() {
        let app = app().await;
        save(&app, "O gato dorme.", Some(1)).await;
        save(&app, "O cachorro corre.", Some(1)).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::GET,
                "/text/find/content",
                json!({ "text": "GATO" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["text"], "O gato dorme.");
    }

    #[tokio::test]
    async fn test_update_replaces_text_and_summary() {
        let app = app().await;
        let saved = save(&app, "Antes um. Antes dois.", Some(2)).await;
        let id = saved["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/text/update/{}?lines=1", id),
                json!({ "text": "Depois um. Depois dois." }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["id"].as_i64().unwrap(), id);
        assert_eq!(body["text"], "Depois um. Depois dois.");
        assert_eq!(body["textReduced"], "Depois um.");
    }

    #[tokio::test]
    async fn test_update_rejects_lines_out_of_range() {
        let app = app().await;
        let saved = save(&app, "Original intacto.", Some(1)).await;
        let id = saved["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/text/update/{}?lines=11", id),
                json!({ "text": "Nunca gravado." }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "O número de linhas deve estar entre 1 e 10.");

        // No mutation happened
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/text/find/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response_json(response).await;
        assert_eq!(body["text"], "Original intacto.");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let app = app().await;
        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/text/update/123?lines=2",
                json!({ "text": "Qualquer texto." }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let app = app().await;
        let saved = save(&app, "Apagável.", Some(1)).await;
        let id = saved["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/text/delete/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Texto deletado com sucesso.");

        // Subsequent reads miss
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/text/find/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Deleting again is rejected with an explanatory message
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/text/delete/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(
            body["error"],
            format!("Texto não encontrado com o ID: {}", id)
        );
    }
}
