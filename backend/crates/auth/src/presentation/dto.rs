//! Request / Response DTOs
//!
//! JSON shapes for the auth API. Every response carries the
//! `{ success, message }` envelope the storefront checks before it
//! looks at anything else.

use serde::{Deserialize, Serialize};

use crate::domain::entity::{Order, User};
use crate::domain::value_object::UserRole;

// ============================================================================
// Requests
// ============================================================================

/// POST /register
///
/// Every field is optional at the wire level; the use case reports the
/// first missing one with its form-specific message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub answer: Option<String>,
}

/// POST /login
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /forgot-password
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
    pub answer: Option<String>,
    pub new_password: Option<String>,
}

/// PUT /profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// PUT /order-status/{order_id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRequest {
    pub status: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of an account. Never carries the password hash or the
/// recovery answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
}

impl From<&User> for UserProfileDto {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            role: user.role,
        }
    }
}

/// Generic `{ success, message }` envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// POST /register response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfileDto>,
}

/// POST /login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfileDto,
    pub token: String,
}

/// PUT /profile response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    pub updated_user: UserProfileDto,
}

/// GET /user-auth and /admin-auth response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    pub ok: bool,
}

/// Order summary
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: String,
    pub buyer_id: String,
    pub buyer_name: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.to_string(),
            buyer_id: order.buyer_id.to_string(),
            buyer_name: order.buyer_name.clone(),
            status: order.status.code().to_string(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

/// GET /orders and /all-orders response
#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderDto>,
}

/// PUT /order-status/{order_id} response
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: OrderDto,
}
