//! HTTP surface of the board: the login flow, the session gate, and the
//! message submit/retrieve handlers.

pub mod auth;
pub mod error;
pub mod messages;
pub mod middleware;
pub mod pages;
pub mod session;

use axum::Router;
use axum::routing::{get, post};

use crate::auth::AppState;

/// Assemble the full route table over `state`. The two message endpoints
/// sit behind the session gate; the login flow and the index stay open
/// (the index does its own check because it redirects instead of
/// returning 401).
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(auth::index))
        .route("/login", get(auth::login_form).post(auth::login));

    let protected = Router::new()
        .route("/send", post(messages::send_message))
        .route("/retrieve", get(messages::recent_messages))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_session,
        ));

    public.merge(protected).with_state(state)
}
