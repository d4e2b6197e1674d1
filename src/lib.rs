//! Parrot — relay editor prompts to HTTP text APIs.
//!
//! This crate backs a small CLI meant to be bound to an editor mapping: it
//! sends a user-supplied prompt or search string to a remote HTTP endpoint
//! and prints the textual response. Two exchange shapes are supported: a
//! structured JSON POST in the `generateContent` wire format, and a GET
//! against a URL template with a form-encoded parameter substituted in.
//!
//! # Quick start
//!
//! ```no_run
//! use parrot::api::{generate, ApiClient};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let client = ApiClient::new(Duration::from_secs(30));
//! let text = generate(
//!     &client,
//!     "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
//!     "my-api-key",
//!     "Explain borrow checking in one sentence.",
//! )
//! .await
//! .unwrap();
//! println!("{text}");
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod error;
pub mod present;
#[cfg(test)]
pub mod testsupport;
pub mod types;
