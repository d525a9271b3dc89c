//! End-to-end flow over the public API with a fake inference backend.

use std::path::PathBuf;

use adaudit_core::{
    AnalysisSession, EncodedPayload, InferenceBackend, MAX_UPLOAD_BYTES, Phase, Result,
    SIZE_LIMIT_MESSAGE,
};
use serde_json::json;

struct CannedBackend {
    response: String,
}

impl InferenceBackend for CannedBackend {
    async fn analyze(&self, _payload: &EncodedPayload) -> Result<String> {
        Ok(self.response.clone())
    }
}

fn check(label: &str) -> serde_json::Value {
    json!({ "label": label, "status": "PASS", "details": "Fine.", "fix": "None" })
}

fn canned_response() -> String {
    json!({
        "overallScore": 42,
        "brutalSummary": "Slow start, weak offer.",
        "categories": {
            "visual": { "score": 30, "feedback": "No brand presence early.", "fix": "Add a 3-second branded intro" },
            "audio": { "score": 88, "feedback": "Clean mix.", "fix": "None" },
            "copy": { "score": 61, "feedback": "Buried offer.", "fix": "Lead with the discount" }
        },
        "checks": {
            "complexity": check("Complexity"),
            "storytelling": check("Storytelling"),
            "hook": check("Hook"),
            "captions": check("Captions"),
            "copyVisibility": check("Copy Visibility"),
            "visualQuality": check("Visual Quality"),
            "audioQuality": check("Audio Quality"),
            "pacing": check("Pacing"),
            "painPoint": check("Pain Point"),
            "cta": check("Call to Action")
        },
        "timestampedNotes": [
            { "time": "00:03", "note": "Hook lands late." }
        ]
    })
    .to_string()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("adaudit-flow-{}-{}", std::process::id(), name))
}

#[tokio::test]
async fn valid_video_flows_to_success_with_the_exact_fix() {
    let path = temp_file("ad.mp4");
    std::fs::write(&path, b"tiny fake mp4").unwrap();

    let mut session = AnalysisSession::new(CannedBackend {
        response: canned_response(),
    });
    session.submit(&path).await;

    match session.phase() {
        Phase::Success(critique) => {
            assert_eq!(critique.overall_score, 42);
            assert!(critique.overall_score <= 100);
            for (_, category) in critique.categories.entries() {
                assert!(category.score <= 100);
            }
            assert_eq!(critique.checks.entries().len(), 10);
            assert_eq!(
                critique.categories.visual.fix(),
                Some("Add a 3-second branded intro")
            );
        }
        other => panic!("expected success, got {other:?}"),
    }

    session.reset();
    assert!(matches!(session.phase(), Phase::Idle));

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn oversized_video_errors_with_the_limit_message() {
    let path = temp_file("huge.mp4");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

    let mut session = AnalysisSession::new(CannedBackend {
        response: canned_response(),
    });
    session.submit(&path).await;

    match session.phase() {
        Phase::Error(message) => {
            assert_eq!(message, SIZE_LIMIT_MESSAGE);
            assert!(message.contains("100MB"));
        }
        other => panic!("expected error, got {other:?}"),
    }

    std::fs::remove_file(&path).unwrap();
}
