//! Connect token validation.
//!
//! Tokens are HS256 JWTs signed with the shared secret. `exp` and `sub` must
//! be present; issuer and audience are checked only when configured.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::config::AuthorizerConfig;

use super::Claims;

const REQUIRED_CLAIMS: [&str; 2] = ["exp", "sub"];

/// Why a connect token was turned away
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("signature does not match")]
    BadSignature,

    #[error("token is not signed with HS256")]
    WrongAlgorithm,

    #[error("issuer not accepted")]
    WrongIssuer,

    #[error("audience not accepted")]
    WrongAudience,

    #[error("missing claim: {0}")]
    MissingClaim(String),

    #[error("malformed token: {0}")]
    Malformed(String),
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::WrongAlgorithm
            }
            ErrorKind::InvalidIssuer => TokenError::WrongIssuer,
            ErrorKind::InvalidAudience => TokenError::WrongAudience,
            ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim(claim.clone()),
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// Checks connect tokens against one shared secret
pub struct JwtValidator {
    key: DecodingKey,
    rules: Validation,
}

impl JwtValidator {
    pub fn new(config: &AuthorizerConfig) -> Self {
        let mut rules = Validation::new(Algorithm::HS256);
        rules.set_required_spec_claims(&REQUIRED_CLAIMS);

        if let Some(issuer) = &config.issuer {
            rules.set_issuer(&[issuer]);
        }
        if let Some(audience) = &config.audience {
            rules.set_audience(&[audience]);
        }

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            rules,
        }
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.key, &self.rules)?;
        Ok(data.claims)
    }
}
