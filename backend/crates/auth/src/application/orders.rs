//! Order Use Cases
//!
//! Thin read and status-update flows over the order summaries the auth
//! service keeps. The buyer list is scoped to the caller; the full list
//! and the status update sit behind the admin gate.

use std::sync::Arc;

use crate::domain::entity::{Order, OrderStatus};
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{OrderId, UserId};
use crate::error::{AuthError, AuthResult};

/// List the caller's own orders
pub struct ListBuyerOrdersUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> ListBuyerOrdersUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, buyer_id: UserId) -> AuthResult<Vec<Order>> {
        self.repo.list_orders_for_buyer(buyer_id).await
    }
}

/// List every order (admin)
pub struct ListAllOrdersUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> ListAllOrdersUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AuthResult<Vec<Order>> {
        self.repo.list_all_orders().await
    }
}

/// Change an order's fulfillment status (admin)
pub struct UpdateOrderStatusUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> UpdateOrderStatusUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: OrderId, status: OrderStatus) -> AuthResult<Order> {
        let updated = self
            .repo
            .update_order_status(order_id, status)
            .await?
            .ok_or(AuthError::NotFound("Order"))?;

        tracing::info!(order_id = %order_id, status = %status, "Order status updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryShopRepository;

    #[tokio::test]
    async fn test_buyer_list_is_scoped() {
        let repo = Arc::new(MemoryShopRepository::new());
        let ada = UserId::new();
        let bob = UserId::new();

        repo.seed_order(ada, "Ada", OrderStatus::Processing);
        repo.seed_order(bob, "Bob", OrderStatus::Shipped);

        let orders = ListBuyerOrdersUseCase::new(repo.clone())
            .execute(ada)
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].buyer_id, ada);

        let all = ListAllOrdersUseCase::new(repo).execute().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_status_update() {
        let repo = Arc::new(MemoryShopRepository::new());
        let order_id = repo.seed_order(UserId::new(), "Ada", OrderStatus::NotProcessed);

        let updated = UpdateOrderStatusUseCase::new(repo)
            .execute(order_id, OrderStatus::Shipped)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_status_update_unknown_order() {
        let repo = Arc::new(MemoryShopRepository::new());

        let err = UpdateOrderStatusUseCase::new(repo)
            .execute(OrderId::new(), OrderStatus::Shipped)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotFound(_)));
    }
}
