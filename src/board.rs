//! Keeps a rendered message list in step with the server.
//!
//! Every mutation is a single request followed by a full re-fetch. Nothing is
//! cached between renders and nothing is updated optimistically.

use async_trait::async_trait;

use crate::api::{ApiError, MessageApi, MessageDraft};
use crate::render::{Card, TimestampStyle};

/// Render target for the message list.
pub trait MessageView {
    /// Replace every card currently shown.
    fn render(&self, cards: Vec<Card>);
    fn show_error(&self, text: &str);
}

/// User decisions. `None` from `prompt` means the dialog was cancelled.
#[async_trait(?Send)]
pub trait Prompter {
    async fn prompt(&self, label: &str) -> Option<String>;
    async fn confirm(&self, question: &str) -> bool;
}

/// The compose form the user posts new messages from.
pub trait ComposeForm {
    fn author(&self) -> String;
    fn content(&self) -> String;
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request went through and the list now shows this many cards.
    Synced(usize),
    /// The user backed out before anything was sent.
    Cancelled,
}

pub struct MessageBoard<A, V, P> {
    api: A,
    view: V,
    prompter: P,
    style: TimestampStyle,
}

impl<A, V, P> MessageBoard<A, V, P>
where
    A: MessageApi,
    V: MessageView,
    P: Prompter,
{
    pub fn new(api: A, view: V, prompter: P, style: TimestampStyle) -> Self {
        Self { api, view, prompter, style }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    fn report(&self, action: &str, err: ApiError) -> ApiError {
        log::warn!("{} failed: {}", action, err);
        self.view.show_error(&format!("Could not {}: {}", action, err));
        err
    }

    /// Re-fetch the whole list and replace the rendered cards in server order.
    /// The view is left untouched on failure.
    pub async fn fetch_messages(&self) -> Result<usize, ApiError> {
        let messages = self
            .api
            .list_messages()
            .await
            .map_err(|e| self.report("load messages", e))?;
        let cards: Vec<Card> = messages.iter().map(|m| Card::from_message(m, &self.style)).collect();
        let count = cards.len();
        log::debug!("rendering {} messages", count);
        self.view.render(cards);
        Ok(count)
    }

    pub async fn create_message(&self, author: &str, content: &str) -> Result<usize, ApiError> {
        let draft = MessageDraft::new(author, content);
        let created = self
            .api
            .create_message(&draft)
            .await
            .map_err(|e| self.report("post message", e))?;
        match created {
            Some(msg) => log::info!("created message {}", msg.id),
            None => log::info!("created message (no echo body)"),
        }
        self.fetch_messages().await
    }

    /// Ask for a new author and content, then overwrite message `id`. Both
    /// prompts are always shown; an empty or cancelled answer sends nothing.
    pub async fn edit_message(&self, id: i64) -> Result<Outcome, ApiError> {
        let author = self.prompter.prompt("New author:").await;
        let content = self.prompter.prompt("New content:").await;
        let draft = match (author, content) {
            (Some(a), Some(c)) if !a.is_empty() && !c.is_empty() => MessageDraft::new(a, c),
            _ => {
                log::debug!("edit of message {} cancelled", id);
                return Ok(Outcome::Cancelled);
            }
        };
        self.api
            .update_message(id, &draft)
            .await
            .map_err(|e| self.report("edit message", e))?;
        log::info!("updated message {}", id);
        self.fetch_messages().await.map(Outcome::Synced)
    }

    pub async fn delete_message(&self, id: i64) -> Result<Outcome, ApiError> {
        if !self.prompter.confirm("Delete this message?").await {
            log::debug!("delete of message {} declined", id);
            return Ok(Outcome::Cancelled);
        }
        self.api
            .delete_message(id)
            .await
            .map_err(|e| self.report("delete message", e))?;
        log::info!("deleted message {}", id);
        self.fetch_messages().await.map(Outcome::Synced)
    }

    /// Post whatever the form holds, then clear it whether or not the post
    /// succeeded.
    pub async fn submit<F: ComposeForm>(&self, form: &F) -> Result<usize, ApiError> {
        let result = self.create_message(&form.author(), &form.content()).await;
        form.reset();
        result
    }
}
