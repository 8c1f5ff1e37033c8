//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, OrderRepository, UserRepository};
use crate::infra::postgres::PgShopRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_admin, require_sign_in};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgShopRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create the auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let state = AuthAppState {
        repo: repo.clone(),
        config: config.clone(),
    };
    let mw_state = AuthMiddlewareState { repo, config };

    let public = Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/forgot-password", post(handlers::forgot_password::<R>));

    let protected = Router::new()
        .route("/user-auth", get(handlers::user_auth))
        .route("/profile", put(handlers::update_profile::<R>))
        .route("/orders", get(handlers::list_orders::<R>))
        .layer(middleware::from_fn({
            let mw_state = mw_state.clone();
            move |req, next| require_sign_in(mw_state.clone(), req, next)
        }));

    // Layers run outermost-first, so the sign-in check is added last:
    // the admin check can rely on the AuthUser extension being present.
    let admin = Router::new()
        .route("/admin-auth", get(handlers::admin_auth))
        .route("/all-orders", get(handlers::list_all_orders::<R>))
        .route(
            "/order-status/{order_id}",
            put(handlers::update_order_status::<R>),
        )
        .layer(middleware::from_fn({
            let mw_state = mw_state.clone();
            move |req, next| require_admin(mw_state.clone(), req, next)
        }))
        .layer(middleware::from_fn({
            let mw_state = mw_state.clone();
            move |req, next| require_sign_in(mw_state.clone(), req, next)
        }));

    public.merge(protected).merge(admin).with_state(state)
}
