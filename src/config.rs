use chrono::Duration;
use std::env;

/// Process configuration, read once at startup. The signing secret and the
/// token lifetime are handed to `TokenIssuer` and the session hook by value;
/// nothing in this crate reads the environment after startup.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
    pub token_secret: String,
    pub token_ttl: Duration,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let ttl_secs: i64 = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        EnvConfig {
            db_url: Self::get_env("DATABASE_URL"),
            token_secret: Self::get_env("TOKEN_SECRET"),
            token_ttl: Duration::seconds(ttl_secs),
        }
    }
}
