use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
///
/// The shop only distinguishes regular buyers from administrators.
/// Stored as its numeric id; serialized the same way so existing
/// clients that compare `role === 1` keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
#[serde(into = "i16", try_from = "i16")]
pub enum UserRole {
    #[default]
    Regular = 0,
    Admin = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Regular => "regular",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => UserRole::Regular,
            1 => UserRole::Admin,
            _ => {
                // Unknown values in storage degrade to the least privilege
                tracing::error!(role_id = id, "Unknown UserRole id, treating as regular");
                UserRole::Regular
            }
        }
    }
}

impl From<UserRole> for i16 {
    fn from(role: UserRole) -> Self {
        role.id()
    }
}

impl TryFrom<i16> for UserRole {
    type Error = String;

    fn try_from(id: i16) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(UserRole::Regular),
            1 => Ok(UserRole::Admin),
            _ => Err(format!("invalid role id: {id}")),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids() {
        assert_eq!(UserRole::Regular.id(), 0);
        assert_eq!(UserRole::Admin.id(), 1);
        assert_eq!(UserRole::from_id(0), UserRole::Regular);
        assert_eq!(UserRole::from_id(1), UserRole::Admin);
    }

    #[test]
    fn test_unknown_id_degrades_to_regular() {
        assert_eq!(UserRole::from_id(42), UserRole::Regular);
    }

    #[test]
    fn test_is_admin() {
        assert!(!UserRole::Regular.is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_role_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "1");
        let role: UserRole = serde_json::from_str("0").unwrap();
        assert_eq!(role, UserRole::Regular);
    }
}
