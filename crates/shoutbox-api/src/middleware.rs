use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use tracing::debug;

use crate::auth::AppState;
use crate::session;

/// Validate the session cookie and stash the verified claims as a request
/// extension. Requests without a valid session get the JSON 401 body and
/// never reach the handler.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let Some(cookie) = jar.get(session::SESSION_COOKIE) else {
        return unauthorized();
    };

    match session::verify(&state.sessions, cookie.value()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => {
            debug!("rejected session token: {}", e);
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response()
}
