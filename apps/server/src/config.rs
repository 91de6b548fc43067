use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use rand::{rngs::OsRng, RngCore};

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// HS256 signing key, always 32 bytes.
    pub jwt_secret: Vec<u8>,
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TALLY_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TALLY_LISTEN_ADDR")?;
        let db_path = std::env::var("TALLY_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("TALLY_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TALLY_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let token_ttl_secs: u64 = std::env::var("TALLY_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        let jwt_secret = match std::env::var("TALLY_JWT_SECRET") {
            Ok(raw) => decode_secret_key(&raw).context("Invalid TALLY_JWT_SECRET")?,
            Err(_) => {
                tracing::warn!(
                    "TALLY_JWT_SECRET is not set; using a random key, tokens will not survive a restart"
                );
                random_secret()
            }
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
        })
    }
}

pub fn random_secret() -> Vec<u8> {
    let mut secret = vec![0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}
