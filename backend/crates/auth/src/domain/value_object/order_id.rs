//! Order Identifier

use kernel::id::Id;

/// Phantom marker for order identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderMarker;

/// Strongly-typed order identifier
pub type OrderId = Id<OrderMarker>;
