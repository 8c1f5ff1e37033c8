//! Forgot Password Use Case
//!
//! Self-service reset: the account's email and recovery answer must
//! match together. A miss on either reports the same joint error
//! without saying which half was wrong.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Forgot password input
pub struct ForgotPasswordInput {
    pub email: Option<String>,
    pub answer: Option<String>,
    pub new_password: Option<String>,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ForgotPasswordUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ForgotPasswordInput) -> AuthResult<()> {
        let email = require(input.email, "Email is Required")?;
        let answer = require(input.answer, "Answer is Required")?;
        let new_password = require(input.new_password, "New Password is Required")?;

        let email = Email::new(email).map_err(|_| AuthError::WrongEmailOrAnswer)?;
        let new_password = RawPassword::new(new_password)?;

        // Joint lookup: the user and the answer must match together
        let user = self
            .repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::WrongEmailOrAnswer)?;

        let mut credentials = self
            .repo
            .find_credentials(user.user_id)
            .await?
            .ok_or(AuthError::WrongEmailOrAnswer)?;

        if !credentials.answer_matches(&answer) {
            return Err(AuthError::WrongEmailOrAnswer);
        }

        let new_hash = new_password.into_stored(self.config.pepper())?;
        credentials.update_password(new_hash);
        self.repo.update_credentials(&credentials).await?;

        tracing::info!(user_id = %user.user_id, "Password reset via recovery answer");

        Ok(())
    }
}

fn require(field: Option<String>, message: &str) -> AuthResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::Validation(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::login::{LoginInput, LoginUseCase};
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
    async fn test_reset_then_login_with_new_password() {
        let (repo, config) = seeded().await;

        ForgotPasswordUseCase::new(repo.clone(), config.clone())
            .execute(ForgotPasswordInput {
                email: Some("ada@shop.example".to_string()),
                answer: Some("blue".to_string()),
                new_password: Some("new-secret-9".to_string()),
            })
            .await
            .unwrap();

        let login = LoginUseCase::new(repo.clone(), config.clone());

        // Old password no longer works
        let err = login
            .execute(LoginInput {
                email: Some("ada@shop.example".to_string()),
                password: Some("hunter42".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        // New password does
        login
            .execute(LoginInput {
                email: Some("ada@shop.example".to_string()),
                password: Some("new-secret-9".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_wrong_answer_is_joint_error() {
        let (repo, config) = seeded().await;
        let use_case = ForgotPasswordUseCase::new(repo, config);

        let cases = [
            ForgotPasswordInput {
                email: Some("ada@shop.example".to_string()),
                answer: Some("red".to_string()),
                new_password: Some("new-secret-9".to_string()),
            },
            ForgotPasswordInput {
                email: Some("nobody@shop.example".to_string()),
                answer: Some("blue".to_string()),
                new_password: Some("new-secret-9".to_string()),
            },
        ];

        for case in cases {
            let err = use_case.execute(case).await.unwrap_err();
            assert!(matches!(err, AuthError::WrongEmailOrAnswer));
        }
    }

    #[tokio::test]
    async fn test_missing_fields_reported_individually() {
        let (repo, config) = seeded().await;
        let use_case = ForgotPasswordUseCase::new(repo, config);

        let err = use_case
            .execute(ForgotPasswordInput {
                email: None,
                answer: Some("blue".to_string()),
                new_password: Some("new-secret-9".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email is Required");

        let err = use_case
            .execute(ForgotPasswordInput {
                email: Some("ada@shop.example".to_string()),
                answer: Some("blue".to_string()),
                new_password: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "New Password is Required");
    }
}
