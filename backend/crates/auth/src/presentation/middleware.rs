//! Auth Middleware
//!
//! Route guards for protected and admin routes. Both answer every
//! request: a missing or bad token gets a structured 401 immediately,
//! never a hung connection.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The verified caller, stored in request extensions by
/// [`require_sign_in`]
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid access token
///
/// On success the verified [`AuthUser`] is inserted into request
/// extensions for downstream handlers.
pub async fn require_sign_in<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = platform::bearer::extract_bearer_token(req.headers()) else {
        return Err(AuthError::TokenInvalid.into_response());
    };

    let user_id = match token::verify(&token, &state.config) {
        Ok(user_id) => user_id,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}

/// Middleware that requires the signed-in caller to be an admin
///
/// Must be layered inside [`require_sign_in`]. Lookup failures are
/// logged with their cause but answered with the same generic 401 as a
/// plain role mismatch, so the response reveals nothing.
pub async fn require_admin<R>(
    state: AuthMiddlewareState<R>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Some(auth_user) = req.extensions().get::<AuthUser>().copied() else {
        return Err(AuthError::TokenInvalid.into_response());
    };

    let user = match state.repo.find_user_by_id(auth_user.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(user_id = %auth_user.user_id, "Admin check for unknown user");
            return Err(AuthError::AdminRequired.into_response());
        }
        Err(e) => {
            tracing::error!(error = %e, "Admin check failed to load user");
            return Err(AuthError::AdminRequired.into_response());
        }
    };

    if !user.is_admin() {
        return Err(AuthError::AdminRequired.into_response());
    }

    Ok(next.run(req).await)
}
