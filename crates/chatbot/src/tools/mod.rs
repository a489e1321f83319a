//! Built-in tools that can be used by the chatbot.

mod random_number;

pub use random_number::RandomNumberTool;
