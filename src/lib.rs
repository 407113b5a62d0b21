//! Codecoach - a small web chat gateway that proxies conversations to an LLM
//! acting as a coding tutor.

pub mod config;
pub mod conversation;
pub mod handlers;
pub mod llm;
pub mod markdown;
pub mod prompt;
pub mod response;
pub mod server;
