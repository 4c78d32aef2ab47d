//! reqwest-backed client for the concierge endpoints.

use async_trait::async_trait;
use url::Url;

use super::{ChatReply, ChatRequest, ConciergeApi};
use crate::config::EndpointConfig;
use crate::error::{Error, Result};
use crate::hotel_info::HotelInfo;

/// Default path of the chat endpoint.
pub const DEFAULT_CHAT_PATH: &str = "/chat";

/// Default path of the hotel-info endpoint.
pub const DEFAULT_HOTEL_INFO_PATH: &str = "/hotel-info";

/// HTTP client for the concierge backend.
#[derive(Debug, Clone)]
pub struct HttpConciergeClient {
    base_url: Url,
    chat_url: Url,
    hotel_info_url: Url,
    http: reqwest::Client,
}

impl HttpConciergeClient {
    /// Create a client using the default endpoint paths.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin of the backend (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_paths(base_url, DEFAULT_CHAT_PATH, DEFAULT_HOTEL_INFO_PATH)
    }

    /// Create a client with explicit endpoint paths.
    pub fn with_paths(
        base_url: impl AsRef<str>,
        chat_path: &str,
        hotel_info_path: &str,
    ) -> Result<Self> {
        Self::with_client(base_url, chat_path, hotel_info_path, reqwest::Client::new())
    }

    /// Create a client around a custom reqwest client.
    pub fn with_client(
        base_url: impl AsRef<str>,
        chat_path: &str,
        hotel_info_path: &str,
        http: reqwest::Client,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        let chat_url = base_url.join(chat_path)?;
        let hotel_info_url = base_url.join(hotel_info_path)?;
        Ok(Self {
            base_url,
            chat_url,
            hotel_info_url,
            http,
        })
    }

    /// Create a client from the `endpoint` configuration section.
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Self::with_paths(&config.base_url, &config.chat_path, &config.hotel_info_path)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolved chat endpoint.
    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }

    /// Resolved hotel-info endpoint.
    pub fn hotel_info_url(&self) -> &Url {
        &self.hotel_info_url
    }

    /// Non-2xx is an error whatever the body says; a 2xx body must parse.
    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ConciergeApi for HttpConciergeClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        tracing::debug!(
            url = %self.chat_url,
            session_id = %request.session_id,
            message_length = request.message.len(),
            "POST chat"
        );
        let response = self
            .http
            .post(self.chat_url.clone())
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn fetch_hotel_info(&self) -> Result<HotelInfo> {
        tracing::debug!(url = %self.hotel_info_url, "GET hotel info");
        let response = self.http.get(self.hotel_info_url.clone()).send().await?;
        Self::read_json(response).await
    }
}
