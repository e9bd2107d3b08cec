#![deny(missing_docs)]
//! Minimal async HTTP helper with NDJSON streaming.
//!
//! Two pieces:
//!
//! - [`Client`]: GET/POST/DELETE over a shared [`reqwest::Client`], with
//!   address normalization and uniform status checking. Non-success
//!   responses become [`Error::Api`], carrying the server's `error` field
//!   when the body is structured JSON and the raw body text otherwise.
//! - [`ndjson`]: an incremental parser turning any stream of text chunks
//!   into decoded JSON values, one per line, buffering partial lines across
//!   chunk boundaries. Lines that fail to decode are logged and skipped.
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use ndjson_client::{response_lines, Client};
//!
//! # async fn run() -> Result<(), ndjson_client::Error> {
//! let client = Client::new();
//! let response = client.get("localhost:11434/api/tags").await?;
//!
//! let mut records = std::pin::pin!(response_lines::<serde_json::Value>(response));
//! while let Some(record) = records.next().await {
//!     println!("{}", record?);
//! }
//! # Ok(()) }
//! ```

mod address;
mod client;
mod error;
mod streaming;

pub use address::format_address;
pub use client::{Client, Payload};
pub use error::Error;
pub use streaming::{ndjson, response_lines};
