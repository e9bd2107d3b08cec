//! Incremental NDJSON parsing.
//!
//! Newline-delimited JSON carries one document per line:
//!
//! ```text
//! {"status":"pulling manifest"}
//! {"status":"downloading","completed":512}
//! ```
//!
//! Transport chunk boundaries do not line up with line boundaries, so the
//! trailing fragment of each chunk is buffered until the next newline (or
//! the end of input) completes it.

use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Parse a stream of text chunks as newline-delimited JSON.
///
/// Yields one decoded value per complete line, in input order. Lines that
/// fail to decode are skipped with a `warn` log entry; only exhaustion of
/// the input ends the stream. A transport error is passed through as the
/// final item, after which the stream ends.
///
/// Nothing is buffered beyond the trailing not-yet-terminated fragment, so
/// arbitrarily long streams parse in constant memory.
pub fn ndjson<T, B, E, S>(chunks: S) -> impl Stream<Item = Result<T, E>>
where
    T: DeserializeOwned,
    B: AsRef<[u8]>,
    S: Stream<Item = Result<B, E>>,
{
    async_stream::stream! {
        let mut buffer = String::new();
        let mut chunks = std::pin::pin!(chunks);

        while let Some(chunk) = chunks.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield Err(e);
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(chunk.as_ref()));

            // Everything up to the last newline is complete; the remainder
            // may be the front half of a line still in flight.
            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].to_string();
                buffer.drain(..=newline);

                if let Some(value) = decode_line(&line) {
                    yield Ok(value);
                }
            }
        }

        // Input ended without a final newline: whatever is buffered still
        // holds records. Empty fragments are dropped here, unlike blank
        // mid-stream lines, which go through the decoder and warn.
        for line in buffer.split('\n').filter(|line| !line.is_empty()) {
            if let Some(value) = decode_line(line) {
                yield Ok(value);
            }
        }
    }
}

/// Decode one line, logging and skipping on failure.
fn decode_line<T: DeserializeOwned>(line: &str) -> Option<T> {
    match serde_json::from_str(line) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(line = %line, error = %e, "invalid json line, skipping");
            None
        }
    }
}

/// Stream the body of a [`reqwest::Response`] as NDJSON records.
///
/// Convenience wrapper feeding [`reqwest::Response::bytes_stream`] into
/// [`ndjson`]; transport failures mid-stream surface as [`Error::Network`].
pub fn response_lines<T>(response: reqwest::Response) -> impl Stream<Item = Result<T, Error>>
where
    T: DeserializeOwned,
{
    ndjson::<T, bytes::Bytes, reqwest::Error, _>(response.bytes_stream())
        .map(|item| item.map_err(Error::from))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
