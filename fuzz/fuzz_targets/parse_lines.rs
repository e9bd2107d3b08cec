#![no_main]

use std::convert::Infallible;

use futures::{StreamExt, stream};
use libfuzzer_sys::fuzz_target;

// Feed arbitrary bytes through the parser in small uneven chunks so line
// boundaries land mid-chunk; no input may panic or wedge the stream.
fuzz_target!(|data: &[u8]| {
    let chunks: Vec<Result<Vec<u8>, Infallible>> =
        data.chunks(7).map(|c| Ok(c.to_vec())).collect();

    futures::executor::block_on(async {
        let records = ndjson_client::ndjson::<serde_json::Value, _, _, _>(stream::iter(chunks));
        let mut records = std::pin::pin!(records);
        while let Some(record) = records.next().await {
            let _ = record;
        }
    });
});
