//! Batch processing types for parallel transformation.

use crate::types::{TransformConfig, TransformResult};
use napi_derive::napi;

/// Input for batch processing - a single text to transform.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier echoed back in the result.
    pub id: String,
    /// Raw, unescaped text.
    pub text: String,
}

/// Result for a single input in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Transform result (present on success).
    pub result: Option<TransformResult>,
    /// User-facing error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of inputs received.
    pub total: u32,
    /// Number of successful transforms.
    pub succeeded: u32,
    /// Number of failed transforms.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Transform configuration shared by all inputs.
    pub config: Option<TransformConfig>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
