//! Core logic including the dispatch loop, conversation state and tool
//! execution.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod chatbot;
pub mod conversation;
mod model_client;
pub mod tool;

pub use chatbot::{Chatbot, ChatbotBuilder};
