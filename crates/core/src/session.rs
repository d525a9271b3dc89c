//! The single orchestrating state holder: sequences ingest, inference and
//! validation around one request at a time.

use std::path::Path;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    client::InferenceBackend,
    error::{AuditError, Result},
    ingest::{self, EncodedPayload},
    types::Critique,
    validate,
};

/// User-facing message for the pre-submit size rejection.
pub static SIZE_LIMIT_MESSAGE: &str = "File too large. Please upload a video under 100MB.";

/// User-facing message for the pre-submit type rejection.
pub static UNSUPPORTED_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload a video file.";

/// The one generic message for every failure past the pre-submit checks. The
/// underlying cause goes to the log, never to the user.
pub static GENERIC_FAILURE_MESSAGE: &str =
    "Failed to analyze video. The file might be too complex for inline analysis, or the format is unsupported.";

/// Where a session currently stands. Success and Error only leave via an
/// explicit reset.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Analyzing,
    Success(Critique),
    Error(String),
}

/// Aborts an in-flight analysis. Cancelling when nothing is in flight does
/// nothing; a stale cancel cannot kill a later submission.
#[derive(Clone)]
pub struct CancelHandle(broadcast::Sender<()>);

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.0.send(());
    }
}

/// One session per user. At most one analysis is in flight: `submit` takes
/// `&mut self` and only acts from `Idle`.
pub struct AnalysisSession<B> {
    backend: B,
    phase: Phase,
    cancel_tx: broadcast::Sender<()>,
}

impl<B: InferenceBackend> AnalysisSession<B> {
    pub fn new(backend: B) -> Self {
        let (cancel_tx, _) = broadcast::channel(1);
        Self {
            backend,
            phase: Phase::Idle,
            cancel_tx,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancel_tx.clone())
    }

    /// Submit a video for analysis. Only acts when the session is idle;
    /// otherwise the current phase is returned untouched. Size and type
    /// violations are reported with specific messages before any network
    /// call; every later failure collapses into the generic message.
    pub async fn submit(&mut self, path: &Path) -> &Phase {
        if !matches!(self.phase, Phase::Idle) {
            tracing::warn!("submission ignored: session is not idle");
            return &self.phase;
        }

        let request_id = Uuid::new_v4();

        let payload = match ingest::ingest(path).await {
            Ok(payload) => payload,
            Err(e @ AuditError::SizeExceeded { .. }) => {
                tracing::error!(%request_id, error = %e, "upload rejected before submission");
                self.phase = Phase::Error(SIZE_LIMIT_MESSAGE.to_string());
                return &self.phase;
            }
            Err(e @ AuditError::UnsupportedType { .. }) => {
                tracing::error!(%request_id, error = %e, "upload rejected before submission");
                self.phase = Phase::Error(UNSUPPORTED_TYPE_MESSAGE.to_string());
                return &self.phase;
            }
            Err(e) => {
                tracing::error!(%request_id, error = %e, "failed to read video file");
                self.phase = Phase::Error(GENERIC_FAILURE_MESSAGE.to_string());
                return &self.phase;
            }
        };

        self.phase = Phase::Analyzing;
        tracing::info!(%request_id, mime_type = %payload.mime_type, "analysis started");

        let mut cancel_rx = self.cancel_tx.subscribe();
        let outcome = tokio::select! {
            _ = cancel_rx.recv() => {
                tracing::info!(%request_id, "analysis cancelled");
                self.phase = Phase::Idle;
                return &self.phase;
            }
            outcome = analyze(&self.backend, &payload) => outcome,
        };

        self.phase = match outcome {
            Ok(critique) => {
                tracing::info!(%request_id, overall_score = critique.overall_score, "analysis succeeded");
                Phase::Success(critique)
            }
            Err(e) => {
                tracing::error!(%request_id, error = %e, "analysis failed");
                Phase::Error(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };
        &self.phase
    }

    /// Drop any held critique or error message and return to idle. A no-op
    /// when already idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

async fn analyze<B: InferenceBackend>(backend: &B, payload: &EncodedPayload) -> Result<Critique> {
    let raw = backend.analyze(payload).await?;
    validate::parse_critique(&raw)
}
