//! Assistant gateway and chat orchestration for Mind Notes.
//!
//! The core crate stays synchronous; everything inherently asynchronous and
//! long-latency (the outbound text-generation request) lives here.

pub mod config;
pub mod gateway;
pub mod openrouter;
pub mod session;

pub use config::{AssistantConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use gateway::{AssistantGateway, GatewayError};
pub use openrouter::{OpenRouterGateway, EMPTY_REPLY, SYSTEM_INSTRUCTION};
pub use session::{
    ChatMessage, ChatSession, MessageId, SendOutcome, Sender, CHAT_SUGGESTIONS, FALLBACK_REPLY,
};
