//! Register Use Case
//!
//! Creates a new shop account. Required fields are checked one at a
//! time in a fixed order, and the first missing one decides the error
//! message, matching what the storefront forms display.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Credentials, User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Register input, straight from the request body
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub answer: Option<String>,
}

/// Register outcome
#[derive(Debug)]
pub enum RegisterOutcome {
    /// The email already has an account. Reported as a non-error so the
    /// storefront can steer the visitor to the login form.
    AlreadyRegistered,
    /// Account created
    Created(User),
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutcome> {
        // Field order here is the order the storefront shows them
        let name = require(input.name, "Name is Required")?;
        let email = require(input.email, "Email is Required")?;
        let password = require(input.password, "Password is Required")?;
        let phone = require(input.phone, "Phone no is Required")?;
        let address = require(input.address, "Address is Required")?;
        let answer = require(input.answer, "Answer is Required")?;

        let email = Email::new(email)?;

        if self.repo.email_exists(&email).await? {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        let password_hash = RawPassword::new(password)?.into_stored(self.config.pepper())?;

        let user = User::new(name, email, phone, address);
        let credentials = Credentials::new(user.user_id, password_hash, answer);

        self.repo.create_user(&user).await?;
        self.repo.create_credentials(&credentials).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutcome::Created(user))
    }
}

/// Treat missing, empty, and whitespace-only all as absent
fn require(field: Option<String>, message: &str) -> AuthResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::Validation(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryShopRepository;

    fn input() -> RegisterInput {
        RegisterInput {
            name: Some("Ada".to_string()),
            email: Some("ada@shop.example".to_string()),
            password: Some("hunter42".to_string()),
            phone: Some("555-0100".to_string()),
            address: Some("1 Analytical Way".to_string()),
            answer: Some("blue".to_string()),
        }
    }

    fn use_case() -> RegisterUseCase<MemoryShopRepository> {
        RegisterUseCase::new(
            Arc::new(MemoryShopRepository::new()),
            Arc::new(AuthConfig::with_random_secret()),
        )
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let outcome = use_case().execute(input()).await.unwrap();
        let RegisterOutcome::Created(user) = outcome else {
            panic!("expected Created");
        };
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email.as_str(), "ada@shop.example");
    }

    #[tokio::test]
    async fn test_register_missing_fields_in_order() {
        let cases = [
            (RegisterInput { name: None, ..input() }, "Name is Required"),
            (RegisterInput { email: None, ..input() }, "Email is Required"),
            (
                RegisterInput { password: None, ..input() },
                "Password is Required",
            ),
            (
                RegisterInput { phone: None, ..input() },
                "Phone no is Required",
            ),
            (
                RegisterInput { address: None, ..input() },
                "Address is Required",
            ),
            (
                RegisterInput { answer: None, ..input() },
                "Answer is Required",
            ),
        ];

        for (case, expected) in cases {
            let err = use_case().execute(case).await.unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[tokio::test]
    async fn test_register_all_missing_reports_name_first() {
        let empty = RegisterInput {
            name: None,
            email: None,
            password: None,
            phone: None,
            address: None,
            answer: None,
        };
        let err = use_case().execute(empty).await.unwrap_err();
        assert_eq!(err.to_string(), "Name is Required");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let use_case = use_case();
        use_case.execute(input()).await.unwrap();

        let outcome = use_case.execute(input()).await.unwrap();
        assert!(matches!(outcome, RegisterOutcome::AlreadyRegistered));
    }

    #[tokio::test]
    async fn test_register_short_password_rejected() {
        let err = use_case()
            .execute(RegisterInput {
                password: Some("12345".to_string()),
                ..input()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}
