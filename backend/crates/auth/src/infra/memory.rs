//! In-Memory Repository
//!
//! Process-local storage backing the demo mode and the handler tests.
//! One struct implements all three repository ports so it can stand in
//! wherever `PgShopRepository` would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{Credentials, Order, OrderStatus, User};
use crate::domain::repository::{CredentialRepository, OrderRepository, UserRepository};
use crate::domain::value_object::{Email, OrderId, UserId, UserRole};
use crate::error::AuthResult;

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, Credentials>,
    orders: Vec<Order>,
}

/// In-memory shop repository
#[derive(Clone, Default)]
pub struct MemoryShopRepository {
    store: Arc<Mutex<Store>>,
}

impl MemoryShopRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an order directly, bypassing the checkout flow
    pub fn seed_order(&self, buyer_id: UserId, buyer_name: &str, status: OrderStatus) -> OrderId {
        let order = Order {
            order_id: OrderId::new(),
            buyer_id,
            buyer_name: buyer_name.to_string(),
            status,
            created_at: Utc::now(),
        };
        let order_id = order.order_id;
        self.store.lock().unwrap().orders.push(order);
        order_id
    }

    /// Flip an existing account to admin
    pub fn promote_to_admin(&self, user_id: UserId) {
        let mut store = self.store.lock().unwrap();
        if let Some(user) = store.users.get_mut(user_id.as_uuid()) {
            user.role = UserRole::Admin;
        }
    }
}

impl UserRepository for MemoryShopRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        self.store
            .lock()
            .unwrap()
            .users
            .insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.store.lock().unwrap().users.get(user_id.as_uuid()).cloned())
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .values()
            .any(|u| &u.email == email))
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        self.store
            .lock()
            .unwrap()
            .users
            .insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }
}

impl CredentialRepository for MemoryShopRepository {
    async fn create_credentials(&self, credentials: &Credentials) -> AuthResult<()> {
        self.store
            .lock()
            .unwrap()
            .credentials
            .insert(credentials.user_id.into_uuid(), credentials.clone());
        Ok(())
    }

    async fn find_credentials(&self, user_id: UserId) -> AuthResult<Option<Credentials>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .credentials
            .get(user_id.as_uuid())
            .cloned())
    }

    async fn update_credentials(&self, credentials: &Credentials) -> AuthResult<()> {
        self.store
            .lock()
            .unwrap()
            .credentials
            .insert(credentials.user_id.into_uuid(), credentials.clone());
        Ok(())
    }
}

impl OrderRepository for MemoryShopRepository {
    async fn list_orders_for_buyer(&self, buyer_id: UserId) -> AuthResult<Vec<Order>> {
        // Newest first, matching the Postgres ordering
        Ok(self
            .store
            .lock()
            .unwrap()
            .orders
            .iter()
            .rev()
            .filter(|o| o.buyer_id == buyer_id)
            .cloned()
            .collect())
    }

    async fn list_all_orders(&self) -> AuthResult<Vec<Order>> {
        Ok(self.store.lock().unwrap().orders.iter().rev().cloned().collect())
    }

    async fn find_order_by_id(&self, order_id: OrderId) -> AuthResult<Option<Order>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned())
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> AuthResult<Option<Order>> {
        let mut store = self.store.lock().unwrap();
        match store.orders.iter_mut().find(|o| o.order_id == order_id) {
            Some(order) => {
                order.set_status(status);
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_roundtrip() {
        let repo = MemoryShopRepository::new();
        let user = User::new(
            "Ada".to_string(),
            Email::new("ada@shop.example").unwrap(),
            "555-0100".to_string(),
            "1 Analytical Way".to_string(),
        );

        repo.create_user(&user).await.unwrap();

        let found = repo.find_user_by_id(user.user_id).await.unwrap().unwrap();
        assert_eq!(found, user);
        assert!(repo.email_exists(&user.email).await.unwrap());
        assert!(
            repo.find_user_by_email(&Email::new("nobody@shop.example").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_orders_newest_first() {
        let repo = MemoryShopRepository::new();
        let buyer = UserId::new();
        repo.seed_order(buyer, "Ada", OrderStatus::NotProcessed);
        let newest = repo.seed_order(buyer, "Ada", OrderStatus::Processing);

        let orders = repo.list_orders_for_buyer(buyer).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, newest);
    }
}
