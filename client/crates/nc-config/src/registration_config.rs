use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENDPOINT_URL};

use nc_core::DEFAULT_IDENTIFIER_DOMAIN;

use serde::Deserialize;

/// Remote registration webhook and identifier settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Webhook receiving the (identifier, push token) pairing
    pub endpoint_url: String,
    /// Domain appended to generated identifiers
    pub identifier_domain: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::from(DEFAULT_ENDPOINT_URL),
            identifier_domain: String::from(DEFAULT_IDENTIFIER_DOMAIN),
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.endpoint_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::registration(format!(
                "registration.endpoint_url must be an http(s) URL, got '{}'",
                self.endpoint_url
            )));
        }

        let domain = &self.identifier_domain;
        if domain.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
            return Err(ConfigError::registration(format!(
                "registration.identifier_domain must be a bare domain, got '{}'",
                domain
            )));
        }

        Ok(())
    }
}
