use crate::common::{AuthUser, Caller};
use crate::domains::auth::JwtService;
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// JWT authentication middleware
///
/// Resolves the Authorization header into a [`Caller`] and stores it in the
/// request extensions. A missing or invalid token yields an anonymous
/// caller; operations reject it themselves.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let caller = match extract_auth_user(&request, &jwt_service) {
        Some(user) => {
            debug!(member_id = %user.member_id, handle = %user.handle, "Authenticated caller");
            Caller::authenticated(user)
        }
        None => {
            debug!("No valid authentication token");
            Caller::anonymous()
        }
    };

    request.extensions_mut().insert(caller);
    next.run(request).await
}

/// Extract and verify the token from the request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Accept both "Bearer <token>" and a raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    jwt_service.verify_token(token).ok().map(AuthUser::from)
}
