//! Access Tokens
//!
//! Stateless signed tokens: `base64url(claims_json).base64url(signature)`
//! where the signature is HMAC-SHA256 over the encoded claims. There is
//! no server-side session table; possession of a valid token is the
//! whole proof.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id in canonical UUID form
    sub: String,
    /// Expiry as Unix seconds
    exp: i64,
}

/// Issue a signed access token for a user
pub fn issue(user_id: UserId, config: &AuthConfig) -> AuthResult<String> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: Utc::now().timestamp() + config.token_ttl_secs(),
    };

    let payload = serde_json::to_vec(&claims)
        .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

    let mut mac = HmacSha256::new_from_slice(&config.token_secret)
        .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))?;
    mac.update(payload_b64.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{payload_b64}.{signature}"))
}

/// Verify a token and return the subject user id
///
/// Signature is checked before the payload is decoded, so malformed
/// claims from an attacker never reach the JSON parser.
pub fn verify(token: &str, config: &AuthConfig) -> AuthResult<UserId> {
    let (payload_b64, signature_b64) = token.split_once('.').ok_or(AuthError::TokenInvalid)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    let mut mac = HmacSha256::new_from_slice(&config.token_secret)
        .map_err(|e| AuthError::Internal(format!("Token verification failed: {e}")))?;
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| AuthError::TokenInvalid)?;
    let claims: Claims =
        serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

    if claims.exp <= Utc::now().timestamp() {
        return Err(AuthError::TokenInvalid);
    }

    UserId::parse(&claims.sub).map_err(|_| AuthError::TokenInvalid)
}
