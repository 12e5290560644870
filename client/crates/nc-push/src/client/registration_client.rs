use crate::{RegistrationError, RegistrationResult};

use nc_core::RegistrationRecord;

use log::debug;
use reqwest::Client as ReqwestClient;

/// HTTP client for the registration webhook.
///
/// No request timeout is set; a hung call ends when the transport gives up.
pub struct RegistrationClient {
    pub endpoint_url: String,
    client: ReqwestClient,
}

impl RegistrationClient {
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            endpoint_url: endpoint_url.trim().to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// POST the record as JSON. Any 2xx is success; the body is ignored.
    pub async fn register(&self, record: &RegistrationRecord) -> RegistrationResult<()> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        debug!("Registration endpoint responded {status}");

        if !status.is_success() {
            return Err(RegistrationError::status(status.as_u16()));
        }

        Ok(())
    }
}
