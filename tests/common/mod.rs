use std::sync::Arc;

use taskboard_auth::{
    AuthService, MemoryStore, NewCredential, SessionValidationHook, TokenIssuer,
};

pub const TEST_SECRET: &str = "hunter2-but-longer";
pub const SIGNING_SECRET: &str = "test-signing-secret";

pub fn sample_user() -> NewCredential {
    NewCredential {
        username: "noah".to_string(),
        first_name: "Noah".to_string(),
        last_name: "Stone".to_string(),
        email: "noah@example.com".to_string(),
    }
}

pub fn second_user() -> NewCredential {
    NewCredential {
        username: "mika".to_string(),
        first_name: "Mika".to_string(),
        last_name: "Hall".to_string(),
        email: "mika@example.com".to_string(),
    }
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub service: AuthService<MemoryStore>,
    pub issuer: TokenIssuer,
}

impl TestContext {
    pub fn new() -> TestContext {
        let store = Arc::new(MemoryStore::new());
        let service = AuthService::new(Arc::clone(&store));
        let issuer = TokenIssuer::new(SIGNING_SECRET).expect("test signing secret");
        TestContext { store, service, issuer }
    }

    pub fn hook(&self) -> SessionValidationHook<MemoryStore> {
        SessionValidationHook::new(self.issuer.clone(), Arc::clone(&self.store))
    }
}
