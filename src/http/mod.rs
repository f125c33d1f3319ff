pub mod error;
pub mod model;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header};
use tracing::{debug, warn};

use crate::config::AppConfig;

use self::{
    error::ApiError,
    model::{GenerateRequest, GenerateResponse},
};

#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ApiError>;
}

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn request(&self, prompt: &str) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .header(header::CONTENT_TYPE, "application/json")
            .json(&GenerateRequest::from_prompt(prompt))
    }
}

#[async_trait]
impl CompletionApi for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ApiError> {
        debug!(endpoint = %self.endpoint, "sending generate request");

        let response = self.request(prompt).send().await?;

        // Error statuses still carry a JSON body; it is decoded like any other.
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "generate request returned an error status");
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
