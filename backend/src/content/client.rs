use once_cell::sync::OnceCell;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

#[derive(Debug, thiserror::Error)]
pub enum ContentFetchError {
    #[error("Request to content API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Content API answered {status} for {endpoint}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Malformed content API response for {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only client for the microCMS content API.
#[derive(Clone, Debug)]
pub struct ContentClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ContentClient {
    pub fn new(service_domain: &str, api_key: &str) -> Self {
        Self::with_base_url(
            format!("https://{}.microcms.io/api/v1", service_domain),
            api_key,
        )
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against `{base_url}/{endpoint}`. No retries.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ContentFetchError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentFetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ContentFetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

static CONTENT_CLIENT: OnceCell<ContentClient> = OnceCell::new();

/// Builds the process-wide client on first call; later calls return that same client.
pub fn init(service_domain: &str, api_key: &str) -> &'static ContentClient {
    CONTENT_CLIENT.get_or_init(|| ContentClient::new(service_domain, api_key))
}
