//! Update Profile Use Case
//!
//! Partial update of the signed-in user's profile. Omitted fields keep
//! their stored values; a new password is optional and re-hashed when
//! present.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{RawPassword, UserId};
use crate::error::{AuthError, AuthResult};

/// Update profile input
pub struct UpdateProfileInput {
    pub user_id: UserId,
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: UpdateProfileInput) -> AuthResult<User> {
        let mut user = self
            .repo
            .find_user_by_id(input.user_id)
            .await?
            .ok_or(AuthError::NotFound("User"))?;

        // Validate the new password before touching anything
        let new_password = match input.password.filter(|p| !p.is_empty()) {
            Some(raw) => Some(RawPassword::new(raw).map_err(|_| {
                AuthError::Validation("Password is required and 6 character long".to_string())
            })?),
            None => None,
        };

        user.apply_profile_update(
            input.name.filter(|v| !v.trim().is_empty()),
            input.phone.filter(|v| !v.trim().is_empty()),
            input.address.filter(|v| !v.trim().is_empty()),
        );
        self.repo.update_user(&user).await?;

        if let Some(new_password) = new_password {
            let mut credentials = self
                .repo
                .find_credentials(user.user_id)
                .await?
                .ok_or(AuthError::NotFound("Credentials"))?;
            credentials.update_password(new_password.into_stored(self.config.pepper())?);
            self.repo.update_credentials(&credentials).await?;
        }

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
