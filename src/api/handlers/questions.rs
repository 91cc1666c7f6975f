//! Handlers for secret question endpoints.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde_json::json;
use validator::Validate;

use crate::api::dto::question::{CreateQuestionRequest, QuestionItem, UpdateQuestionRequest};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::pagination::Paginate;
use crate::error::AppError;
use crate::state::AppState;

/// Parses the optional `enabled` filter.
fn enabled_filter(value: Option<&str>) -> Result<Option<bool>, AppError> {
    match value {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(Some(false)),
        Some(v) => Err(AppError::bad_request(
            "The enabled parameter must be true or false",
            json!({ "enabled": v }),
        )),
    }
}

/// Lists secret questions, one page at a time.
///
/// # Endpoint
///
/// `GET /api/v1/questions`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `per_page` (optional): Items per page (default: 10, max: 100)
/// - `enabled` (optional): Only enabled (`true`) or disabled (`false`) questions
///
/// # Errors
///
/// Returns 400 if `enabled` is not a boolean.
/// Returns 404 if the page does not exist.
pub async fn list_questions_handler(
    State(state): State<AppState>,
    paginate: Paginate,
) -> Result<Response, AppError> {
    let enabled = enabled_filter(paginate.arg("enabled"))?;

    let page = state
        .question_service
        .list_questions(enabled, paginate.request)
        .await?;

    paginate.respond(page.map(QuestionItem::from))
}

/// Creates a secret question.
///
/// # Endpoint
///
/// `POST /api/v1/questions` (administrators only)
///
/// # Errors
///
/// Returns 400 if the question is empty or too long.
/// Returns 409 if the question already exists.
pub async fn create_question_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionItem>), AppError> {
    payload.validate()?;

    let question = state
        .question_service
        .create_question(payload.question, payload.enabled.unwrap_or(true))
        .await?;

    Ok((StatusCode::CREATED, Json(question.into())))
}

/// Retrieves a single question.
///
/// # Endpoint
///
/// `GET /api/v1/questions/{id}`
pub async fn get_question_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<QuestionItem>, AppError> {
    let question = state.question_service.get_question(id).await?;
    Ok(Json(question.into()))
}

/// Enables or disables a question.
///
/// # Endpoint
///
/// `PATCH /api/v1/questions/{id}` (administrators only)
///
/// # Errors
///
/// Returns 404 if the question does not exist.
pub async fn update_question_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateQuestionRequest>,
) -> Result<Json<QuestionItem>, AppError> {
    let question = state
        .question_service
        .set_enabled(id, payload.enabled)
        .await?;
    Ok(Json(question.into()))
}
