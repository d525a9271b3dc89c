//! Adaudit Core Library
//!
//! Core functionality for submitting a short video ad to a multimodal
//! inference service with a strict output schema, validating the returned
//! critique, and driving the idle/analyzing/success/error workflow around
//! that single request.

pub mod client;
pub mod error;
pub mod format;
pub mod ingest;
pub mod schema;
pub mod session;
pub mod types;
pub mod validate;

// Re-export commonly used items at crate root
pub use client::{DEFAULT_MODEL, GeminiClient, InferenceBackend};
pub use error::{AuditError, Result};
pub use format::format_critique_readable;
pub use ingest::{EncodedPayload, MAX_UPLOAD_BYTES, detect_mime_type, ingest};
pub use session::{
    AnalysisSession, CancelHandle, GENERIC_FAILURE_MESSAGE, Phase, SIZE_LIMIT_MESSAGE,
    UNSUPPORTED_TYPE_MESSAGE,
};
pub use types::{
    Categories, CategoryResult, CheckStatus, Checks, Critique, NO_FIX_SENTINEL, SpecificCheck,
    TimestampedNote,
};
pub use validate::parse_critique;
