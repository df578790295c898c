use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Guards mutating methods with a bearer token when `ADMIN_TOKEN` is
/// configured. Reads and CORS preflight always pass through; with no token
/// configured the guard is inert and mutations stay open.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = request.method();
    let mutating = method != Method::GET && method != Method::HEAD && method != Method::OPTIONS;

    if mutating {
        if let Some(expected) = &state.config.admin_token {
            let presented = request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "));
            if presented != Some(expected.as_str()) {
                tracing::warn!("rejected unauthenticated {} {}", method, request.uri().path());
                return Err(AppError::Unauthorized);
            }
        }
    }

    Ok(next.run(request).await)
}
