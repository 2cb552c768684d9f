use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::filter::MovementQuery;
use crate::models::movement::PagedMovements;
use crate::models::settings::Settings;
use super::traits::MovementsProvider;

const PROVIDER_NAME: &str = "MovementsApi";
const MOVEMENTS_PATH: &str = "/v1.0/movements";

/// HTTP client for the upstream movements API.
///
/// - **Endpoint**: `GET {base_url}/v1.0/movements`
/// - **Arguments**: the set fields of [`MovementQuery`] as camelCase query
///   parameters; unset fields are left out entirely.
/// - **Response**: a `PagedMovements` JSON body.
///
/// Non-2xx responses become `CoreError::Api`; connection failures and
/// timeouts become `CoreError::Network`. No retries.
pub struct HttpMovementsProvider {
    client: Client,
    base_url: String,
}

impl HttpMovementsProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.upstream_base_url.clone(),
            Duration::from_secs(settings.upstream_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn movements_url(&self) -> String {
        format!("{}{MOVEMENTS_PATH}", self.base_url)
    }
}

#[async_trait]
impl MovementsProvider for HttpMovementsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_movements(&self, query: &MovementQuery) -> Result<PagedMovements, CoreError> {
        let resp = self
            .client
            .get(self.movements_url())
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("upstream returned {status}: {}", body.trim()),
            });
        }

        resp.json::<PagedMovements>().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse movements page: {e}"),
        })
    }
}
