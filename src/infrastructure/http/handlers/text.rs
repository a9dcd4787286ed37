//! Text HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::config::TextConfig;
use crate::domain::{validate_content, ContentViolation, TextRecord};
use crate::infrastructure::http::error::{ApiError, FieldError};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub id: i64,
    pub text: String,
    #[serde(rename = "textReduced")]
    pub text_reduced: Option<String>,
}

impl From<TextRecord> for TextResponse {
    fn from(record: TextRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            text: record.text,
            text_reduced: record.text_reduced,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LinesQuery {
    pub lines: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a request body against the content rules, mapping each violation
/// to its user-facing message.
fn validate_request(text: &str, rules: &TextConfig) -> Result<(), ApiError> {
    let violations = validate_content(text, rules.max_length);
    if violations.is_empty() {
        return Ok(());
    }

    let details = violations
        .into_iter()
        .map(|v| match v {
            ContentViolation::Blank => FieldError::new("text", "Texto não pode ser vazio"),
            ContentViolation::TooLong { max } => FieldError::new(
                "text",
                format!("O texto não pode ter mais de {} caracteres", max),
            ),
            ContentViolation::InvalidChars => {
                FieldError::new("text", "O texto contém caracteres inválidos")
            }
        })
        .collect();

    Err(ApiError::Validation(details))
}

/// Effective sentence count for a request, falling back to the configured
/// default. Negative values count as zero sentences.
fn effective_lines(query: &LinesQuery, rules: &TextConfig) -> usize {
    let lines = query.lines.unwrap_or(rules.default_lines as i64);
    usize::try_from(lines).unwrap_or(0)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /text/save?lines=N
///
/// Rejects duplicates (advisory existence check) with 400 before persisting.
pub async fn save_text(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinesQuery>,
    Json(req): Json<TextRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    validate_request(&req.text, &state.text_rules)?;

    if state.service.exists_by_text(&req.text).await? {
        return Err(ApiError::BadRequest(
            "Texto já existe no banco de dados.".to_string(),
        ));
    }

    let lines = effective_lines(&query, &state.text_rules);
    let record = state.service.save_text(&req.text, lines).await?;

    tracing::info!(id = record.id, lines = lines, "Text saved");

    Ok(Json(TextResponse::from(record)))
}

/// GET /text/find/content
pub async fn find_by_content(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Result<Json<Vec<TextResponse>>, ApiError> {
    let records = state.service.find_by_content(&req.text).await?;
    Ok(Json(records.into_iter().map(TextResponse::from).collect()))
}

/// GET /text/find
pub async fn find_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TextResponse>>, ApiError> {
    let records = state.service.find_all().await?;
    Ok(Json(records.into_iter().map(TextResponse::from).collect()))
}

/// GET /text/find/{id}
pub async fn find_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TextResponse>, ApiError> {
    let record = state
        .service
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Texto não encontrado com o ID: {}", id)))?;

    Ok(Json(TextResponse::from(record)))
}

/// PUT /text/update/{id}?lines=N
///
/// `lines` must fall within the configured range; a missing id is 404.
pub async fn update_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<LinesQuery>,
    Json(req): Json<TextRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    validate_request(&req.text, &state.text_rules)?;

    let rules = &state.text_rules;
    let lines = query.lines.unwrap_or(rules.default_lines as i64);
    if lines < rules.min_lines as i64 || lines > rules.max_lines as i64 {
        return Err(ApiError::BadRequest(format!(
            "O número de linhas deve estar entre {} e {}.",
            rules.min_lines, rules.max_lines
        )));
    }

    let record = state
        .service
        .update_text(id, &req.text, lines as usize)
        .await?;

    tracing::info!(id = id, lines = lines, "Text updated");

    Ok(Json(TextResponse::from(record)))
}

/// DELETE /text/delete/{id}
///
/// An absent id is rejected with 400 and an explanatory message.
pub async fn delete_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.service.delete_text(id).await {
        Ok(()) => {
            tracing::info!(id = id, "Text deleted");
            Ok(Json(MessageResponse {
                message: "Texto deletado com sucesso.".to_string(),
            }))
        }
        Err(ApplicationError::NotFound { id }) => Err(ApiError::BadRequest(format!(
            "Texto não encontrado com o ID: {}",
            id
        ))),
        Err(e) => Err(e.into()),
    }
}
