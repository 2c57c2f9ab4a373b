pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, MessageApi};
pub use error::ApiError;
pub use models::{Message, MessageDraft};
