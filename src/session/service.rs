use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{SessionClaims, SessionConfig};
use crate::actions::SessionIdentity;
use crate::tiers::Tier;
use crate::{AccessError, Account};

/// Issues and verifies HS256 session tokens.
#[derive(Clone)]
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Signs a token for `account` carrying its current tier.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "issue_session", skip_all, err))]
    pub fn issue(&self, account: &Account) -> Result<String, AccessError> {
        let now = Utc::now();
        let claims = SessionClaims {
            user_id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.tier.as_str().to_owned(),
            iat: now.timestamp(),
            exp: (now + self.config.lifetime).timestamp(),
            iss: self.config.issuer.clone(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            log::error!(target: "tierwise", "msg=\"failed to sign session\", error=\"{e}\"");
            AccessError::Internal(e.to_string())
        })
    }

    /// Checks signature and expiry and returns the raw claims.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AccessError> {
        let mut validation = Validation::new(Algorithm::HS256);

        if let Some(ref iss) = self.config.issuer {
            validation.set_issuer(&[iss]);
        }

        let token_data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(
                |e| match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AccessError::TokenExpired,
                    _ => AccessError::TokenInvalid,
                },
            )?;

        Ok(token_data.claims)
    }

    /// Verifies `token` and returns the identity it carries.
    ///
    /// An unrecognized `role` claim yields [`Tier::Member`].
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "verify_session", skip_all, err))]
    pub fn verify(&self, token: &str) -> Result<SessionIdentity, AccessError> {
        let claims = self.decode(token)?;

        Ok(SessionIdentity {
            user_id: claims.user_id,
            tier: Tier::from_session_value(Some(&claims.role)),
            email: claims.email,
            name: claims.name,
        })
    }

    pub fn lifetime(&self) -> Duration {
        self.config.lifetime
    }
}
