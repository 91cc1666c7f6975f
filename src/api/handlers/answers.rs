//! Handlers for the caller's own secret answers.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use validator::Validate;

use crate::api::dto::answer::{AnswerItem, CreateAnswerRequest};
use crate::api::extract::ApiJson;
use crate::api::pagination::Paginate;
use crate::domain::claims::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's answers, one page at a time.
///
/// # Endpoint
///
/// `GET /api/v1/answers` (users only)
pub async fn list_answers_handler(
    State(state): State<AppState>,
    claims: Claims,
    paginate: Paginate,
) -> Result<Response, AppError> {
    let page = state
        .answer_service
        .list_answers(&claims.sub, paginate.request)
        .await?;

    paginate.respond(page.map(AnswerItem::from))
}

/// Stores the caller's answer to a secret question.
///
/// # Endpoint
///
/// `POST /api/v1/answers` (users only)
///
/// # Errors
///
/// Returns 400 if the question does not exist or is disabled.
/// Returns 409 if the caller already answered the question.
pub async fn create_answer_handler(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<AnswerItem>), AppError> {
    payload.validate()?;

    let answer = state
        .answer_service
        .create_answer(&claims.sub, payload.question_id, &payload.answer)
        .await?;

    Ok((StatusCode::CREATED, Json(answer.into())))
}
