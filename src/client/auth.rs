use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use crate::config::endpoint::EndpointConfig;

/// Immutable Basic-Auth credential pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read both halves from their configured value sources
    pub fn resolve(endpoint: &EndpointConfig) -> Result<Self> {
        let username = endpoint.username.resolve().context("endpoint.username")?;
        let password = endpoint.password.resolve().context("endpoint.password")?;
        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Basic base64(username:password)`
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_auth_header_encodes_user_and_password() {
        let credentials = Credentials::new("login", "senha");
        // base64("login:senha")
        assert_eq!(credentials.basic_auth_header(), "Basic bG9naW46c2VuaGE=");
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("carga", "top-secret"));
        assert!(rendered.contains("carga"));
        assert!(!rendered.contains("top-secret"));
    }
}
