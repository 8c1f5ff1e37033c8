//! Repository Traits
//!
//! Storage ports for the auth service. Defined with `trait_variant` so
//! the async methods are `Send` and usable from axum handlers, while
//! the `Local*` variants stay available for single-threaded callers.

use crate::domain::entity::{Credentials, Order, OrderStatus, User};
use crate::domain::value_object::{Email, OrderId, UserId};
use crate::error::AuthResult;

/// Account profile storage
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new account
    async fn create_user(&self, user: &User) -> AuthResult<()>;

    /// Find an account by id
    async fn find_user_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find an account by normalized email
    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Cheap existence probe used by registration
    async fn email_exists(&self, email: &Email) -> AuthResult<bool>;

    /// Persist profile changes
    async fn update_user(&self, user: &User) -> AuthResult<()>;
}

/// Secret storage (password hash and recovery answer)
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Persist credentials for a new account
    async fn create_credentials(&self, credentials: &Credentials) -> AuthResult<()>;

    /// Load credentials for an account
    async fn find_credentials(&self, user_id: UserId) -> AuthResult<Option<Credentials>>;

    /// Persist a changed password hash
    async fn update_credentials(&self, credentials: &Credentials) -> AuthResult<()>;
}

/// Order summary storage
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Orders placed by one buyer, newest first
    async fn list_orders_for_buyer(&self, buyer_id: UserId) -> AuthResult<Vec<Order>>;

    /// Every order in the shop, newest first
    async fn list_all_orders(&self) -> AuthResult<Vec<Order>>;

    /// Find a single order
    async fn find_order_by_id(&self, order_id: OrderId) -> AuthResult<Option<Order>>;

    /// Change the fulfillment status, returning the updated order
    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> AuthResult<Option<Order>>;
}
