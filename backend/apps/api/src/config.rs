//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded).

use std::net::SocketAddr;

use anyhow::Context;
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use posts::PostsConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Runtime settings for the API process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs on in-memory storage
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Origins allowed by CORS
    pub frontend_origins: Vec<String>,
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:31113")?;

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let password_pepper = get("PASSWORD_PEPPER")
            .map(|b64| general_purpose::STANDARD.decode(b64.trim()))
            .transpose()
            .context("PASSWORD_PEPPER must be standard base64")?;

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            database_max_connections,
            frontend_origins,
            password_pepper,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        match &self.password_pepper {
            Some(pepper) => AuthConfig::default().with_pepper(pepper.clone()),
            None => AuthConfig::default(),
        }
    }

    pub fn posts_config(&self) -> PostsConfig {
        PostsConfig::default()
    }
}
