use thiserror::Error;

/// Error taxonomy for the audit pipeline (spec §7): ingest size/type
/// rejections, inference transport failures, empty or schema-violating
/// responses, plus IO and missing-credential conditions.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("file is {size} bytes, over the {limit} byte limit")]
    SizeExceeded { size: u64, limit: u64 },

    #[error("unsupported file type: {found}")]
    UnsupportedType { found: String },

    #[error("inference backend returned no usable response")]
    EmptyResponse,

    #[error("response violated the critique schema: {reason}")]
    SchemaViolation { reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
