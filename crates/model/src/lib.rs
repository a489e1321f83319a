//! An abstraction layer for different completion gateways.
//!
//! This crate establishes an unified protocol for the chatbot to talk
//! to various completion providers, so that the dispatch loop can
//! switch between them without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod reply;
mod request;

pub use error::*;
pub use provider::*;
pub use reply::*;
pub use request::*;
