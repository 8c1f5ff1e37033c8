//! Order Entity
//!
//! The auth service only carries a thin order summary: enough for the
//! buyer's order list and the admin status board. Line items, payment,
//! and fulfillment live elsewhere.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{OrderId, UserId};
use crate::error::AuthError;

/// Order fulfillment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    NotProcessed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Storage / wire code
    pub const fn code(&self) -> &'static str {
        match self {
            OrderStatus::NotProcessed => "not_processed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a client-submitted status
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_processed" => Ok(OrderStatus::NotProcessed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AuthError::Validation(format!(
                "Unknown order status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Order summary as seen by the auth service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: OrderId,
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(
            OrderStatus::parse("Shipped").unwrap(),
            OrderStatus::Shipped
        );
        assert_eq!(
            OrderStatus::parse(" not_processed ").unwrap(),
            OrderStatus::NotProcessed
        );
        assert!(OrderStatus::parse("teleported").is_err());
    }

    #[test]
    fn test_status_code_roundtrip() {
        for status in [
            OrderStatus::NotProcessed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.code()).unwrap(), status);
        }
    }
}
