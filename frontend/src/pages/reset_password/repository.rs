use crate::api::{ApiClient, ApiError, LogResetResponse, ResetEventPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn log_password_reset(
        &self,
        payload: ResetEventPayload,
    ) -> Result<LogResetResponse, ApiError> {
        self.client.log_password_reset(&payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ResetPasswordRepository {
        ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn payload() -> ResetEventPayload {
        ResetEventPayload {
            email: "user@example.com".into(),
            reset_time: "2024-05-01T12:00:00.000Z".into(),
        }
    }

    #[tokio::test]
    async fn log_password_reset_calls_api() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/log-password-reset")
                .json_body(json!({
                    "email": "user@example.com",
                    "resetTime": "2024-05-01T12:00:00.000Z"
                }));
            then.status(200).json_body(json!({ "status": "logged" }));
        });

        let response = repository(&server)
            .log_password_reset(payload())
            .await
            .unwrap();
        assert_eq!(response.status, "logged");
        mock.assert();
    }

    #[tokio::test]
    async fn log_password_reset_propagates_server_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/log-password-reset");
            then.status(500).json_body(json!({
                "error": "Internal server error",
                "code": "INTERNAL_SERVER_ERROR"
            }));
        });

        let error = repository(&server)
            .log_password_reset(payload())
            .await
            .expect_err("should surface the server error");
        assert_eq!(error.code, "INTERNAL_SERVER_ERROR");
    }
}
