use reqwest::{Client, Response};
use uuid::Uuid;

use crate::{api::types::*, config};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends a reset event to the logger endpoint.
    pub async fn log_password_reset(
        &self,
        payload: &ResetEventPayload,
    ) -> Result<LogResetResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request_id = Uuid::new_v4().to_string();
        log::debug!("Logging password reset event (request {})", request_id);

        let response = self
            .http_client()
            .post(format!("{}/log-password-reset", base_url))
            .header(REQUEST_ID_HEADER, &request_id)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(mut error) => {
            if error.code.is_empty() {
                error.code = format!("HTTP_{}", status.as_u16());
            }
            error
        }
        Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
    }
}
