//! HTTP request handlers.

mod chat;
mod health;
mod version;

pub use chat::{ChatApiRequest, ChatApiResponse, chat, index};
pub use health::{livez, readyz};
pub use version::version;
