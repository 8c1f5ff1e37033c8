//! Login Use Case
//!
//! Verifies credentials and issues an access token. Every failure mode
//! collapses into the same `InvalidCredentials` error so the response
//! cannot be used to enumerate accounts.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = input.email.filter(|e| !e.trim().is_empty());
        let password = input.password.filter(|p| !p.trim().is_empty());

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::InvalidCredentials);
        };

        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credentials = self
            .repo
            .find_credentials(user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !credentials.password_hash.matches(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(user.user_id, &self.config)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::MemoryShopRepository;

    async fn seeded() -> (Arc<MemoryShopRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(MemoryShopRepository::new());
        let config = Arc::new(AuthConfig::with_random_secret());

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                name: Some("Ada".to_string()),
                email: Some("ada@shop.example".to_string()),
                password: Some("hunter42".to_string()),
                phone: Some("555-0100".to_string()),
                address: Some("1 Analytical Way".to_string()),
                answer: Some("blue".to_string()),
            })
            .await
            .unwrap();

        (repo, config)
    }

    #[tokio::test]
    async fn test_login_success() {
        let (repo, config) = seeded().await;
        let output = LoginUseCase::new(repo, config.clone())
            .execute(LoginInput {
                email: Some("ada@shop.example".to_string()),
                password: Some("hunter42".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(output.user.name, "Ada");
        let subject = token::verify(&output.token, &config).unwrap();
        assert_eq!(subject, output.user.user_id);
    }

    #[tokio::test]
    async fn test_login_failures_are_uniform() {
        let (repo, config) = seeded().await;
        let use_case = LoginUseCase::new(repo, config);

        let cases = [
            // Missing fields
            LoginInput { email: None, password: None },
            // Unknown account
            LoginInput {
                email: Some("nobody@shop.example".to_string()),
                password: Some("hunter42".to_string()),
            },
            // Wrong password
            LoginInput {
                email: Some("ada@shop.example".to_string()),
                password: Some("wrong-password".to_string()),
            },
        ];

        for case in cases {
            let err = use_case.execute(case).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid email or password");
        }
    }
}
