use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::store::CredentialStore;
use crate::token::TokenIssuer;

/// Opaque rejection. Malformed token, bad signature, expired, and deleted
/// identity all collapse into this one value.
#[derive(Debug)]
pub struct Rejected;

/// Identity inserted into request extensions once the hook accepts a token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

/// Per-request token check: verify the signature and expiry, then re-resolve
/// the claimed identity against the store. A token outlives its account only
/// on paper; once the record is gone, validation fails.
pub struct SessionValidationHook<S> {
    issuer: TokenIssuer,
    store: Arc<S>,
}

impl<S: CredentialStore> SessionValidationHook<S> {
    pub fn new(issuer: TokenIssuer, store: Arc<S>) -> Self {
        Self { issuer, store }
    }

    pub async fn validate(&self, token: &str) -> Result<String, Rejected> {
        let claims = self.issuer.decode(token).map_err(|_| Rejected)?;

        match self.store.find_by_identifier(&claims.sub).await {
            Ok(Some(_)) => Ok(claims.sub),
            _ => Err(Rejected),
        }
    }
}

/// Bearer validator for `actix_web_httpauth::middleware::HttpAuthentication`.
/// Expects a `web::Data<SessionValidationHook<S>>` in app data. What to do
/// about absent tokens is the route tree's policy, not this hook's.
pub async fn bearer_validator<S: CredentialStore + 'static>(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(hook) = req
        .app_data::<web::Data<SessionValidationHook<S>>>()
        .cloned()
    else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };

    match hook.validate(credentials.token()).await {
        Ok(identity) => {
            req.extensions_mut().insert(AuthenticatedUser(identity));
            Ok(req)
        }
        Err(Rejected) => Err((ErrorUnauthorized("Invalid token"), req)),
    }
}
