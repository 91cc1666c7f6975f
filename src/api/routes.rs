//! API route configuration.
//!
//! Every endpoint requires a bearer access token; the guard applied to each
//! group decides which roles may call it.

use crate::api::handlers::{
    create_answer_handler, create_question_handler, get_question_handler, list_answers_handler,
    list_questions_handler, update_question_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

/// All API routes, grouped by the guard protecting them.
///
/// # Endpoints
///
/// Any valid token:
/// - `GET   /questions`       - List secret questions (paginated)
/// - `GET   /questions/{id}`  - Get a secret question
///
/// Administrators (`admin_required`):
/// - `POST  /questions`       - Create a secret question
/// - `PATCH /questions/{id}`  - Enable or disable a secret question
///
/// Users (`user_required`):
/// - `GET   /answers`         - List the caller's answers (paginated)
/// - `POST  /answers`         - Answer a secret question
pub fn api_routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/questions", get(list_questions_handler))
        .route("/questions/{id}", get(get_question_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::jwt_required,
        ));

    let admin = Router::new()
        .route("/questions", post(create_question_handler))
        .route("/questions/{id}", patch(update_question_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::admin_required,
        ));

    let user = Router::new()
        .route(
            "/answers",
            get(list_answers_handler).post(create_answer_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::user_required));

    Router::new().merge(authenticated).merge(admin).merge(user)
}
