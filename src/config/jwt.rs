use std::env;

use anyhow::Context;

/// Token signing configuration.
///
/// `JWT_SECRET` is mandatory: a deployment without an explicit signing key
/// refuses to start rather than falling back to a well-known default.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET")
            .context("JWT_SECRET must be set (refusing to start with a default signing key)")?;

        Ok(Self {
            secret,
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        })
    }
}
