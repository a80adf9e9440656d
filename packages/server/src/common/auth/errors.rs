use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// The one failure an operation hands back to the transport; everything
/// else is normalized to `false` or `None` inside the operation.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
