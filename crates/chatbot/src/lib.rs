//! An out-of-the-box chatbot that assembles the built-in tools and model
//! providers.
//!
//! The crate includes a CLI for chatting in the terminal, and you can also
//! use it as a library to bring the chatbot into your own host apps.

#![deny(missing_docs)]

mod models;
pub mod tools;

pub use models::{ModelKey, UnknownModelKey};

/// Re-exports of [`chatbot_core`] crate.
pub mod core {
    pub use chatbot_core::*;
}
