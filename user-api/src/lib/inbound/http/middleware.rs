use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_TOKEN;
use crate::inbound::http::handlers::TOKEN_NOT_FOUND;
use crate::inbound::http::router::AppState;

/// Identity decoded from a verified bearer token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that verifies the bearer token and attaches the caller's identity.
///
/// Malformed, forged and expired tokens all get the same 403.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)
        .ok_or_else(|| ApiError::Forbidden(TOKEN_NOT_FOUND.to_string()))?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Forbidden(INVALID_TOKEN.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.id),
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Second space-separated segment of the Authorization header (`Bearer <token>`).
fn extract_token_from_header(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}
