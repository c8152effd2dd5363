use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::{env, fs};

use crate::config::settings::SettingsConfig;
use crate::utils::constants::DEFAULT_TOKEN_PATH;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub endpoint: EndpointConfig,
}

/// ================================
/// Remote endpoint
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    /// base URL, probed as-is; the token path is appended to it
    pub base_url: String,
    pub token_path: Option<String>,
    pub username: GenericSourceValue,
    pub password: GenericSourceValue,
}

impl EndpointConfig {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            base_url,
            token_path: None,
            username: GenericSourceValue::Literal { value: username },
            password: GenericSourceValue::Literal { value: password },
        }
    }

    pub fn token_path(&self) -> &str {
        self.token_path.as_deref().unwrap_or(DEFAULT_TOKEN_PATH)
    }

    /// `<base_url><token_path>` without doubling the joining slash
    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.token_path())
    }
}

/// Credential value sources
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum GenericSourceValue {
    Literal {
        value: String,
    },
    FromEnv {
        from_env: String,
    },
    FromFile {
        path: String,
    },
}

impl GenericSourceValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            GenericSourceValue::Literal { value } => Ok(value.to_owned()),
            GenericSourceValue::FromEnv { from_env } => env::var(from_env)
                .map_err(|err| anyhow!("env variable '{}' is not readable: {}", from_env, err)),
            GenericSourceValue::FromFile { path } => fs::read_to_string(path)
                .map(|res| res.trim().to_string())
                .map_err(|err| anyhow!("file '{}' is not readable: {}", path, err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn token_url_joins_without_double_slash() {
        let mut endpoint = EndpointConfig::new("http://api.local/".into(), "u".into(), "p".into());
        assert_eq!(endpoint.token_url(), "http://api.local/getToken");

        endpoint.base_url = "http://api.local/v1".into();
        endpoint.token_path = Some("/auth/token".into());
        assert_eq!(endpoint.token_url(), "http://api.local/v1/auth/token");
    }

    #[test]
    fn resolve_reads_trimmed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  s3cret  ").unwrap();

        let value = GenericSourceValue::FromFile {
            path: file.path().to_string_lossy().into_owned(),
        };
        assert_eq!(value.resolve().unwrap(), "s3cret");
    }

    #[test]
    fn resolve_reports_missing_env() {
        let value = GenericSourceValue::FromEnv {
            from_env: "BASIC_TOKEN_CLIENT_SURELY_UNSET_VAR".into(),
        };
        let err = value.resolve().unwrap_err();
        assert!(err.to_string().contains("BASIC_TOKEN_CLIENT_SURELY_UNSET_VAR"));
    }
}
