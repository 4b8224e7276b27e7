pub mod client;
pub mod error;
pub mod modellake;
pub mod types;

pub use client::CompletionClient;
pub use error::LlmError;
pub use modellake::ModelLakeClient;
pub use types::{ChatRequest, ChatResponse, Message, Role};
