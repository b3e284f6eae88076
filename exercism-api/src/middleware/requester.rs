/// Bearer-token requester middleware
///
/// Reads `Authorization: Bearer <token>`, validates the token with the
/// configured secret, and inserts a [`Requester`] into request extensions.
/// Requests without a valid token are rejected with 401 before reaching the
/// handler.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use exercism_shared::auth::{token::validate_token, Requester};

use crate::app::AppState;
use crate::error::ApiError;

pub async fn requester_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    let claims = validate_token(token, state.jwt_secret())?;
    let requester = Requester::from_claims(&claims);

    tracing::debug!(requester_id = %requester.user_id, "Authenticated requester");

    req.extensions_mut().insert(requester);
    Ok(next.run(req).await)
}
