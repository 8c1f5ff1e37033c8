//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::forgot_password::{ForgotPasswordInput, ForgotPasswordUseCase};
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::orders::{
    ListAllOrdersUseCase, ListBuyerOrdersUseCase, UpdateOrderStatusUseCase,
};
use crate::application::register::{RegisterInput, RegisterOutcome, RegisterUseCase};
use crate::application::update_profile::{UpdateProfileInput, UpdateProfileUseCase};
use crate::domain::entity::OrderStatus;
use crate::domain::repository::{CredentialRepository, OrderRepository, UserRepository};
use crate::domain::value_object::OrderId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthCheckResponse, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    OrderDto, OrderResponse, OrderStatusRequest, OrdersResponse, RegisterRequest,
    RegisterResponse, UpdateProfileRequest, UpdateProfileResponse, UserProfileDto,
};
use crate::presentation::middleware::AuthUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
        phone: req.phone,
        address: req.address,
        answer: req.answer,
    };

    match use_case.execute(input).await? {
        // Not an error: the storefront redirects to the login form
        RegisterOutcome::AlreadyRegistered => Ok((
            StatusCode::OK,
            Json(RegisterResponse {
                success: false,
                message: "Already Register please login".to_string(),
                user: None,
            }),
        )),
        RegisterOutcome::Created(user) => Ok((
            StatusCode::CREATED,
            Json(RegisterResponse {
                success: true,
                message: "User Register Successfully".to_string(),
                user: Some(UserProfileDto::from(&user)),
            }),
        )),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "login successfully".to_string(),
        user: UserProfileDto::from(&output.user),
        token: output.token,
    }))
}

// ============================================================================
// Forgot Password
// ============================================================================

/// POST /forgot-password
pub async fn forgot_password<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = ForgotPasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(ForgotPasswordInput {
            email: req.email,
            answer: req.answer,
            new_password: req.new_password,
        })
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Password Reset Successfully".to_string(),
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// PUT /profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UpdateProfileResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(UpdateProfileInput {
            user_id: auth_user.user_id,
            name: req.name,
            password: req.password,
            phone: req.phone,
            address: req.address,
        })
        .await?;

    Ok(Json(UpdateProfileResponse {
        success: true,
        message: "Profile Updated Successfully".to_string(),
        updated_user: UserProfileDto::from(&user),
    }))
}

// ============================================================================
// Auth Checks
// ============================================================================

/// GET /user-auth
///
/// Reachable only through the sign-in middleware, so arriving here at
/// all means the token was valid.
pub async fn user_auth() -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse { ok: true })
}

/// GET /admin-auth
pub async fn admin_auth() -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse { ok: true })
}

// ============================================================================
// Orders
// ============================================================================

/// GET /orders
pub async fn list_orders<R>(
    State(state): State<AuthAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
) -> AuthResult<Json<OrdersResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let orders = ListBuyerOrdersUseCase::new(state.repo.clone())
        .execute(auth_user.user_id)
        .await?;

    Ok(Json(OrdersResponse {
        success: true,
        orders: orders.iter().map(OrderDto::from).collect(),
    }))
}

/// GET /all-orders (admin)
pub async fn list_all_orders<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<OrdersResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let orders = ListAllOrdersUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(OrdersResponse {
        success: true,
        orders: orders.iter().map(OrderDto::from).collect(),
    }))
}

/// PUT /order-status/{order_id} (admin)
pub async fn update_order_status<R>(
    State(state): State<AuthAppState<R>>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<OrderStatusRequest>,
) -> AuthResult<Json<OrderResponse>>
where
    R: UserRepository + CredentialRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let status = OrderStatus::parse(&req.status)?;

    let order = UpdateOrderStatusUseCase::new(state.repo.clone())
        .execute(OrderId::from_uuid(order_id), status)
        .await?;

    Ok(Json(OrderResponse {
        success: true,
        order: OrderDto::from(&order),
    }))
}
