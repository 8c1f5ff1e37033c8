//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Email, UserId, UserRole};

/// A shop account
///
/// Profile data only. The password hash and the security answer live in
/// [`super::Credentials`] so a profile read can never leak them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular account
    pub fn new(name: String, email: Email, phone: String, address: String) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            name,
            email,
            phone,
            address,
            role: UserRole::Regular,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update
    ///
    /// Each field is optional; an omitted field keeps its stored value.
    pub fn apply_profile_update(
        &mut self,
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(address) = address {
            self.address = address;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Ada".to_string(),
            Email::new("ada@shop.example").unwrap(),
            "555-0100".to_string(),
            "1 Analytical Way".to_string(),
        )
    }

    #[test]
    fn test_new_user_is_regular() {
        let user = sample_user();
        assert_eq!(user.role, UserRole::Regular);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_profile_update_keeps_omitted_fields() {
        let mut user = sample_user();
        user.apply_profile_update(Some("Ada L.".to_string()), None, None);

        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.phone, "555-0100");
        assert_eq!(user.address, "1 Analytical Way");
    }
}
