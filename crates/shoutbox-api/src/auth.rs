use std::collections::HashMap;
use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, error};

use shoutbox_store::MessageStore;
use shoutbox_types::api::LoginForm;

use crate::error::AuthError;
use crate::pages;
use crate::session::{self, SessionConfig};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: MessageStore,
    pub credentials: CredentialStore,
    pub sessions: SessionConfig,
}

/// Fixed username to password mapping, immutable for the process lifetime.
/// Comparison is plain string equality; swapping in hashed credentials
/// later only touches this type.
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            users: pairs
                .into_iter()
                .map(|(user, password)| (user.into(), password.into()))
                .collect(),
        }
    }

    /// The built-in account set.
    pub fn preset() -> Self {
        Self::new([
            ("Administrator", "Pwd&1234"),
            ("Super admin", "Pwd&1234"),
            ("User A", "Pwd&1234"),
            ("User B", "Pwd&1234"),
        ])
    }

    /// Exact, case-sensitive comparison of both fields. A miss never
    /// reveals whether the username exists.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

pub async fn login_form() -> Html<String> {
    pages::login(None)
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, StatusCode> {
    if state.credentials.verify(&form.username, &form.password).is_err() {
        debug!("failed login attempt for {:?}", form.username);
        return Ok(pages::login(Some(pages::LOGIN_ERROR)).into_response());
    }

    let token = session::issue(&state.sessions, &form.username).map_err(|e| {
        error!("could not issue session token: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let cookie = Cookie::build((session::SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let claims = jar
        .get(session::SESSION_COOKIE)
        .and_then(|cookie| session::verify(&state.sessions, cookie.value()).ok());

    match claims {
        Some(_) => pages::board().into_response(),
        None => Redirect::to("/login").into_response(),
    }
}
