use crate::domain::model::SendRequest;
use crate::domain::ports::MessageTransport;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Transport adapter for the local WhatsApp-Web automation bridge. The
/// bridge opens the chat in a browser tab, waits for it to load, types the
/// message at the target time and optionally closes the tab. This side only
/// POSTs the request and checks the status.
pub struct BridgeTransport {
    client: Client,
    base_url: String,
}

impl BridgeTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn send_url(&self) -> String {
        format!("{}/send", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MessageTransport for BridgeTransport {
    async fn send(&self, request: &SendRequest) -> Result<()> {
        let response = self
            .client
            .post(self.send_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport {
                message: format!("bridge returned status {}", status),
            });
        }

        tracing::debug!("Bridge accepted send for {}", request.phone);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn request() -> SendRequest {
        SendRequest {
            phone: "+5511987654321".to_string(),
            message: "Olá, Maria".to_string(),
            hour: 14,
            minute: 11,
            wait_seconds: 15,
            close_tab: true,
        }
    }

    #[tokio::test]
    async fn test_send_posts_json_payload() {
        let server = MockServer::start();
        let bridge_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send")
                .json_body(serde_json::json!({
                    "phone": "+5511987654321",
                    "message": "Olá, Maria",
                    "hour": 14,
                    "minute": 11,
                    "wait_seconds": 15,
                    "close_tab": true
                }));
            then.status(200);
        });

        let transport = BridgeTransport::new(server.url(""));
        let result = transport.send(&request()).await;

        bridge_mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_transport_error() {
        let server = MockServer::start();
        let bridge_mock = server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(503);
        });

        let transport = BridgeTransport::new(server.url(""));
        let result = transport.send(&request()).await;

        bridge_mock.assert();
        assert!(matches!(result, Err(AppError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start();
        let bridge_mock = server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(200);
        });

        let transport = BridgeTransport::new(format!("{}/", server.url("")));
        assert!(transport.send(&request()).await.is_ok());
        bridge_mock.assert();
    }
}
