use serde::{Deserialize, Serialize};

/// Literal the inference engine uses for a `fix` field when no remediation is
/// needed. Consumers must treat it as "no fix", never display it.
pub const NO_FIX_SENTINEL: &str = "None";

/// Outcome of a single diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warn => "WARN",
        }
    }
}

/// Score and critique for one of the three pillars (visual, audio, copy).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryResult {
    pub score: u8,
    pub feedback: String,
    pub fix: String,
}

impl CategoryResult {
    /// The actionable fix, if the engine supplied one.
    pub fn fix(&self) -> Option<&str> {
        (self.fix != NO_FIX_SENTINEL).then_some(self.fix.as_str())
    }
}

/// One of the ten fixed diagnostic checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecificCheck {
    pub label: String,
    pub status: CheckStatus,
    pub details: String,
    pub fix: String,
}

impl SpecificCheck {
    /// The actionable fix, if the engine supplied one.
    pub fn fix(&self) -> Option<&str> {
        (self.fix != NO_FIX_SENTINEL).then_some(self.fix.as_str())
    }
}

/// The three pillar evaluations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Categories {
    pub visual: CategoryResult,
    pub audio: CategoryResult,
    pub copy: CategoryResult,
}

impl Categories {
    pub fn entries(&self) -> [(&'static str, &CategoryResult); 3] {
        [
            ("visual", &self.visual),
            ("audio", &self.audio),
            ("copy", &self.copy),
        ]
    }
}

/// The ten fixed diagnostic checks. Every slot is required; an extra or
/// missing key fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Checks {
    pub complexity: SpecificCheck,
    pub storytelling: SpecificCheck,
    pub hook: SpecificCheck,
    pub captions: SpecificCheck,
    pub copy_visibility: SpecificCheck,
    pub visual_quality: SpecificCheck,
    pub audio_quality: SpecificCheck,
    pub pacing: SpecificCheck,
    pub pain_point: SpecificCheck,
    pub cta: SpecificCheck,
}

impl Checks {
    pub fn entries(&self) -> [(&'static str, &SpecificCheck); 10] {
        [
            ("complexity", &self.complexity),
            ("storytelling", &self.storytelling),
            ("hook", &self.hook),
            ("captions", &self.captions),
            ("copyVisibility", &self.copy_visibility),
            ("visualQuality", &self.visual_quality),
            ("audioQuality", &self.audio_quality),
            ("pacing", &self.pacing),
            ("painPoint", &self.pain_point),
            ("cta", &self.cta),
        ]
    }
}

/// A critique anchored to a point in the video's timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimestampedNote {
    /// MM:SS position in the video.
    pub time: String,
    pub note: String,
}

/// The full validated critique returned by the inference engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Critique {
    pub overall_score: u8,
    pub brutal_summary: String,
    pub categories: Categories,
    pub checks: Checks,
    pub timestamped_notes: Vec<TimestampedNote>,
}
