//! User Identifier

use kernel::id::Id;

/// Phantom marker for user identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

/// Strongly-typed user identifier
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::new();
        let parsed = UserId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
