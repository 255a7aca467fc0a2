pub mod config;
pub mod error;
pub mod hash;
pub mod hook;
pub mod service;
pub mod store;
pub mod token;

pub use error::Error;
pub use hook::{AuthenticatedUser, SessionValidationHook};
pub use service::{AuthService, NewCredential, ProfileUpdate};
pub use store::{Credential, CredentialStore, MemoryStore, PgStore};
pub use token::{Claims, IssuedToken, TokenIssuer};
