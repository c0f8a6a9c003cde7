#![deny(missing_docs)]
//! Node.js bindings that surface scrawl's Rust implementation.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use scrawl_core::{ScrawlError, TransformRequest};

/// Batch processing types.
pub mod batch;
/// Config conversion helpers.
mod convert;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
use convert::to_transform_options;
pub use types::*;

fn to_napi_error(err: &ScrawlError) -> Error {
    Error::from_reason(err.user_message())
}

/// Transforms already-escaped text into handwriting markup.
///
/// No validation or escaping happens here; use `transformRequest` for raw
/// user input.
#[napi]
pub fn transform(text: String, config: Option<TransformConfig>) -> String {
    let options = to_transform_options(config.as_ref());
    scrawl_core::transform_with_options(&text, &options)
}

/// Validates, escapes and transforms raw user text.
///
/// Throws `"No text provided"` when the text is blank after trimming.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transformRequest } = require('scrawl-napi');
///
/// const { formattedText } = transformRequest('Groceries:\n- milk\n- eggs');
/// ```
#[napi(js_name = "transformRequest")]
pub fn transform_request(
    text: String,
    config: Option<TransformConfig>,
) -> napi::Result<TransformResult> {
    let options = to_transform_options(config.as_ref());
    scrawl_core::handle_transform(&TransformRequest::new(text), &options)
        .map(TransformResult::from)
        .map_err(|e| to_napi_error(&e))
}

/// Renders the print view body: escapes and transforms without validation.
#[napi(js_name = "renderPrint")]
pub fn render_print(text: String, config: Option<TransformConfig>) -> String {
    let options = to_transform_options(config.as_ref());
    scrawl_core::render_print(&text, &options)
}

/// Transforms many raw texts in parallel using Rayon.
///
/// Each input goes through the same validation and escaping as
/// `transformRequest`. Results come back in input order.
///
/// # Arguments
///
/// * `inputs` - Texts to transform, each with an id
/// * `options` - Optional batch processing options (thread count, error handling, config)
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transformBatch } = require('scrawl-napi');
///
/// const result = transformBatch(
///   [{ id: 'a', text: 'Hello' }, { id: 'b', text: '' }],
///   { continueOnError: true },
/// );
/// console.log(`${result.stats.failed} of ${result.stats.total} failed`);
/// ```
#[napi(js_name = "transformBatch")]
pub fn transform_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let transform_options = to_transform_options(opts.config.as_ref());

    // Configure thread pool if max_threads is specified
    let pool = match opts.max_threads {
        Some(max_threads) => Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads as usize)
                .build()
                .map_err(|e| Error::from_reason(format!("Failed to build thread pool: {e}")))?,
        ),
        None => None,
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let request = TransformRequest::new(input.text);
        match scrawl_core::handle_transform(&request, &transform_options) {
            Ok(response) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(response.into()),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.user_message().to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        match pool {
            Some(pool) => pool.install(|| inputs.into_par_iter().map(process_input).collect()),
            None => inputs.into_par_iter().map(process_input).collect(),
        }
    } else {
        // Stop at the first failure; later inputs are not attempted.
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();
    let stats = BatchStats {
        total,
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
    };
    log::debug!(
        "batch transformed {}/{} inputs in {:.2}ms",
        stats.succeeded,
        stats.total,
        stats.processing_time_ms
    );

    Ok(BatchProcessingResult { results, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, text: &str) -> BatchInput {
        BatchInput {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn transform_does_not_escape() {
        let out = transform("a&lt;".to_string(), None);
        assert_eq!(out, scrawl_core::transform("a&lt;"));
    }

    #[test]
    fn transform_request_escapes_and_validates() {
        let result = transform_request("<i>".to_string(), None).unwrap();
        assert!(result.formatted_text.contains("&lt;"));
        assert!(!result.formatted_text.contains("<i>"));

        let err = transform_request("  ".to_string(), None).unwrap_err();
        assert_eq!(err.reason, "No text provided");
    }

    #[test]
    fn render_print_accepts_empty_text() {
        assert_eq!(render_print(String::new(), None), "");
    }

    #[test]
    fn batch_preserves_order_and_counts() {
        let inputs = vec![
            input("a", "Hello"),
            input("b", ""),
            input("c", "Note:\nFirst"),
            input("d", "- milk"),
        ];
        let out = transform_batch(inputs, None).unwrap();

        let ids: Vec<&str> = out.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
        assert_eq!(out.stats.total, 4);
        assert_eq!(out.stats.succeeded, 3);
        assert_eq!(out.stats.failed, 1);
        assert_eq!(out.results[1].error.as_deref(), Some("No text provided"));
        assert!(out.results[1].result.is_none());
        assert_eq!(
            out.results[0].result.as_ref().unwrap().formatted_text,
            scrawl_core::transform("Hello")
        );
    }

    #[test]
    fn batch_stops_at_first_error_when_asked() {
        let inputs = vec![input("a", "one"), input("b", " "), input("c", "three")];
        let options = BatchOptions {
            continue_on_error: Some(false),
            ..Default::default()
        };
        let out = transform_batch(inputs, Some(options)).unwrap();
        assert_eq!(out.results.len(), 2);
        assert_eq!(out.stats.total, 3);
        assert_eq!(out.stats.succeeded, 1);
        assert_eq!(out.stats.failed, 1);
    }

    #[test]
    fn batch_with_dedicated_pool() {
        let inputs = (0..32).map(|i| input(&i.to_string(), "same text")).collect();
        let options = BatchOptions {
            max_threads: Some(2),
            config: Some(TransformConfig {
                title_max_chars: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = transform_batch(inputs, Some(options)).unwrap();
        assert_eq!(out.stats.succeeded, 32);
        let first = &out.results[0].result.as_ref().unwrap().formatted_text;
        assert!(!first.contains("class=\"title\""));
        assert!(
            out.results
                .iter()
                .all(|r| &r.result.as_ref().unwrap().formatted_text == first)
        );
    }
}
