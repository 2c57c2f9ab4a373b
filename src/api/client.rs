use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::error::ApiError;
use crate::api::models::{ErrorBody, Message, MessageDraft};

/// The four calls the board needs from the backend.
#[async_trait(?Send)]
pub trait MessageApi {
    async fn list_messages(&self) -> Result<Vec<Message>, ApiError>;
    async fn create_message(&self, draft: &MessageDraft) -> Result<Option<Message>, ApiError>;
    async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<Option<Message>, ApiError>;
    async fn delete_message(&self, id: i64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    messages_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base = Url::parse(&Self::base_dir(base_url))?;
        Ok(Self {
            http: builder.build()?,
            messages_url: base.join("messages/")?,
        })
    }

    // `Url::join` replaces the last segment unless the base ends with '/'.
    fn base_dir(base_url: &str) -> String {
        let url = crate::utils::normalize_url(base_url);
        if url.ends_with('/') { url } else { format!("{}/", url) }
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }

    fn message_url(&self, id: i64) -> Result<Url, ApiError> {
        Ok(self.messages_url.join(&id.to_string())?)
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let detail = match resp.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body).ok().map(ErrorBody::into_text),
            Err(_) => None,
        };
        Err(ApiError::Status { status: status.as_u16(), detail })
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let body = Self::check(resp).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Success is decided by status alone; the echoed message is a bonus.
    async fn echo(resp: Response) -> Result<Option<Message>, ApiError> {
        let resp = Self::check(resp).await?;
        Ok(match resp.bytes().await {
            Ok(body) => serde_json::from_slice(&body).ok(),
            Err(e) => {
                log::debug!("dropping unreadable echo body: {}", e);
                None
            }
        })
    }

    /// Reach the list endpoint and report its status without judging it.
    pub async fn ping(&self) -> Result<u16, ApiError> {
        let resp = self.http.get(self.messages_url.clone()).send().await?;
        Ok(resp.status().as_u16())
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        log::debug!("GET {}", self.messages_url);
        let resp = self.http.get(self.messages_url.clone()).send().await?;
        Self::decode(resp).await
    }

    pub async fn get_message(&self, id: i64) -> Result<Message, ApiError> {
        let url = self.message_url(id)?;
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        Self::decode(resp).await
    }

    pub async fn create_message(&self, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        log::debug!("POST {}", self.messages_url);
        let resp = self.http.post(self.messages_url.clone()).json(draft).send().await?;
        Self::echo(resp).await
    }

    pub async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        let url = self.message_url(id)?;
        log::debug!("PUT {}", url);
        let resp = self.http.put(url).json(draft).send().await?;
        Self::echo(resp).await
    }

    pub async fn delete_message(&self, id: i64) -> Result<(), ApiError> {
        let url = self.message_url(id)?;
        log::debug!("DELETE {}", url);
        let resp = self.http.delete(url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl MessageApi for ApiClient {
    async fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        ApiClient::list_messages(self).await
    }

    async fn create_message(&self, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        ApiClient::create_message(self, draft).await
    }

    async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        ApiClient::update_message(self, id, draft).await
    }

    async fn delete_message(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_message(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_endpoints_against_base() {
        let client = ApiClient::new("localhost:8000", None).unwrap();
        assert_eq!(client.messages_url().as_str(), "http://localhost:8000/messages/");
        assert_eq!(client.message_url(7).unwrap().as_str(), "http://localhost:8000/messages/7");

        let nested = ApiClient::new("https://example.org/board", None).unwrap();
        assert_eq!(nested.messages_url().as_str(), "https://example.org/board/messages/");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(ApiClient::new("", None), Err(ApiError::InvalidUrl(_))));
    }
}
