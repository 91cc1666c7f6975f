//! Access token guards.
//!
//! Three route layers, applied with [`axum::middleware::from_fn_with_state`]:
//!
//! - [`jwt_required`] - any valid token
//! - [`admin_required`] - valid token whose `roles` contain `admin`
//! - [`user_required`] - valid token whose `roles` contain `user`
//!
//! On success the verified [`Claims`] are stored in the request extensions,
//! where handlers pick them up by taking `Claims` as an argument.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::claims::{Claims, ROLE_ADMIN, ROLE_USER};
use crate::{error::AppError, state::AppState};

/// Message returned when a non-administrator calls an admin-only route.
pub const ADMIN_REQUIRED_MESSAGE: &str =
    "You must be an administrator to proceed with this action";

/// Message returned when a caller without the `user` role calls a user-only route.
pub const USER_REQUIRED_MESSAGE: &str =
    "Administrators are not authorized to proceed with this action";

/// Verifies the bearer token and attaches its claims to the request.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or the
/// token fails verification.
async fn authenticate(st: &AppState, req: Request) -> Result<(Claims, Request), AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.auth_service.verify(&token)?;

    parts.extensions.insert(claims.clone());

    Ok((claims, Request::from_parts(parts, body)))
}

/// Rejects claims that do not carry `role`.
fn require_role(claims: &Claims, role: &str, message: &'static str) -> Result<(), AppError> {
    if claims.has_role(role) {
        return Ok(());
    }

    tracing::warn!(
        user = %claims.sub,
        roles = ?claims.roles,
        required = role,
        "Role check failed"
    );
    Err(AppError::forbidden(message, json!({})))
}

/// Requires any valid access token.
pub async fn jwt_required(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (_, req) = authenticate(&st, req).await?;
    Ok(next.run(req).await)
}

/// Requires a valid access token with the `admin` role.
///
/// # Errors
///
/// Returns `401 Unauthorized` for a missing or invalid token and
/// `403 Forbidden` when the `admin` role is absent.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/questions", post(create_question_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::admin_required));
/// ```
pub async fn admin_required(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, req) = authenticate(&st, req).await?;
    require_role(&claims, ROLE_ADMIN, ADMIN_REQUIRED_MESSAGE)?;
    Ok(next.run(req).await)
}

/// Requires a valid access token with the `user` role.
///
/// Administrators' tokens do not carry `user`, so they are turned away from
/// self-service routes.
///
/// # Errors
///
/// Returns `401 Unauthorized` for a missing or invalid token and
/// `403 Forbidden` when the `user` role is absent.
pub async fn user_required(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, req) = authenticate(&st, req).await?;
    require_role(&claims, ROLE_USER, USER_REQUIRED_MESSAGE)?;
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Route is not protected by an authentication layer"}),
            )
        })
    }
}
