use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Claim set carried by a session token. `sub` is the login identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mints and decodes HS256 bearer tokens under the process signing secret.
///
/// Tokens are stateless: nothing is persisted server-side, so a token stays
/// structurally valid until its `exp` passes. Whether the identity it names
/// still exists is checked per request by the session hook.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// An empty signing secret is a configuration error and refuses
    /// construction; it is never reported per request.
    pub fn new(secret: &str) -> Result<Self, Error> {
        if secret.is_empty() {
            return Err(Error::InvalidState(
                "token signing secret must not be empty".to_string(),
            ));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn issue(&self, identifier: &str, validity: Duration) -> Result<IssuedToken, Error> {
        let now = Utc::now();
        let expires_at = now + validity;
        let claims = Claims {
            sub: identifier.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::InvalidState(e.to_string()))?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Decode and verify a presented token. Any failure collapses to
    /// `Unauthorized`; callers learn nothing about which check tripped.
    pub fn decode(&self, token: &str) -> Result<Claims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| Error::Unauthorized)?;

        // expiry boundary is inclusive of "now": a zero-validity token is
        // already dead
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(Error::Unauthorized);
        }

        Ok(data.claims)
    }
}
