//! Generative-model delegate for clinic practice queries.
//!
//! This crate forwards natural-language questions plus a serialized
//! slice of clinical data to an external text-generation service and
//! relays the answer. It is deliberately thin: one blocking HTTP call
//! per question, fixed fallback messages on failure, nothing cached.

pub mod assistant;
pub mod client;
pub mod context;
pub mod prompts;

pub use assistant::*;
pub use client::*;
pub use context::*;
