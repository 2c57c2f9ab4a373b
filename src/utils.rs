use std::future::Future;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::api::{ApiClient, ApiError, Message, MessageApi, MessageDraft};

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Run `fut` on the tokio runtime and await its result from any executor,
/// including the glib main context.
pub async fn on_runtime<T, Fut>(fut: Fut) -> Result<T, ApiError>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    RUNTIME
        .spawn(fut)
        .await
        .map_err(|e| ApiError::Runtime(e.to_string()))?
}

/// `ApiClient` whose requests execute on [`RUNTIME`]. reqwest needs a tokio
/// reactor, which the GTK main loop does not provide.
#[derive(Clone)]
pub struct RuntimeApi(pub ApiClient);

#[async_trait(?Send)]
impl MessageApi for RuntimeApi {
    async fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        let client = self.0.clone();
        on_runtime(async move { client.list_messages().await }).await
    }

    async fn create_message(&self, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        let (client, draft) = (self.0.clone(), draft.clone());
        on_runtime(async move { client.create_message(&draft).await }).await
    }

    async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<Option<Message>, ApiError> {
        let (client, draft) = (self.0.clone(), draft.clone());
        on_runtime(async move { client.update_message(id, &draft).await }).await
    }

    async fn delete_message(&self, id: i64) -> Result<(), ApiError> {
        let client = self.0.clone();
        on_runtime(async move { client.delete_message(id).await }).await
    }
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_scheme_and_adds_default() {
        assert_eq!(normalize_url(" https://board.example "), "https://board.example");
        assert_eq!(normalize_url("127.0.0.1:8000"), "http://127.0.0.1:8000");
        assert_eq!(normalize_url("HTTP://Board.example"), "HTTP://Board.example");
        assert_eq!(normalize_url("Https://board.example"), "Https://board.example");
    }

    #[test]
    fn on_runtime_propagates_task_errors() {
        let res: Result<(), ApiError> = RUNTIME.block_on(on_runtime(async {
            Err(ApiError::Status { status: 503, detail: None })
        }));
        assert_eq!(res.unwrap_err().status(), Some(503));
    }
}
