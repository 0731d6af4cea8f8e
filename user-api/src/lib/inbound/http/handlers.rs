use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;

pub mod create_user;
pub mod delete_user;
pub mod list_users;
pub mod login;
pub mod update_user;

pub const USER_NOT_FOUND: &str = "User not found";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const TOKEN_NOT_FOUND: &str = "Access denied. Token not found.";
pub const INVALID_TOKEN: &str = "Invalid token";

/// Successful response: a status and a bare JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(USER_NOT_FOUND.to_string()),
            UserError::NotFoundByEmail(_) => ApiError::BadRequest(USER_NOT_FOUND.to_string()),
            UserError::InvalidCredentials => ApiError::BadRequest(INVALID_CREDENTIALS.to_string()),
            UserError::MissingFields => ApiError::BadRequest(err.to_string()),
            UserError::Password(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_status_mapping() {
        assert_eq!(
            ApiError::from(UserError::NotFound("3".into())),
            ApiError::NotFound(USER_NOT_FOUND.into())
        );
        assert_eq!(
            ApiError::from(UserError::NotFoundByEmail("x@example.com".into())),
            ApiError::BadRequest(USER_NOT_FOUND.into())
        );
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::BadRequest(INVALID_CREDENTIALS.into())
        );
        assert_eq!(
            ApiError::from(UserError::MissingFields),
            ApiError::BadRequest("Name, email and password are required".into())
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response = ApiError::InternalServerError("hash backend exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
