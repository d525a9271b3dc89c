//! Total validating parser for engine output. The engine promises to follow
//! the response schema; this module does not take it at its word.

use crate::{
    error::{AuditError, Result},
    types::{CategoryResult, Critique, SpecificCheck},
};

/// Parse raw engine output into a typed critique, rejecting anything that does
/// not match the expected shape: missing or extra fields, wrong types,
/// out-of-range scores, unknown statuses, empty leaves.
pub fn parse_critique(raw: &str) -> Result<Critique> {
    let critique: Critique =
        serde_json::from_str(raw).map_err(|e| violation(e.to_string()))?;

    check_score("overallScore", critique.overall_score)?;
    check_text("brutalSummary", &critique.brutal_summary)?;

    for (name, category) in critique.categories.entries() {
        check_category(name, category)?;
    }
    for (name, check) in critique.checks.entries() {
        check_check(name, check)?;
    }
    for (index, note) in critique.timestamped_notes.iter().enumerate() {
        check_text(&format!("timestampedNotes[{index}].time"), &note.time)?;
        check_text(&format!("timestampedNotes[{index}].note"), &note.note)?;
    }

    Ok(critique)
}

fn violation(reason: impl Into<String>) -> AuditError {
    AuditError::SchemaViolation {
        reason: reason.into(),
    }
}

fn check_score(field: &str, score: u8) -> Result<()> {
    if score > 100 {
        return Err(violation(format!("{field} score {score} is out of range 0-100")));
    }
    Ok(())
}

fn check_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(violation(format!("{field} is empty")));
    }
    Ok(())
}

fn check_category(name: &str, category: &CategoryResult) -> Result<()> {
    check_score(&format!("categories.{name}"), category.score)?;
    check_text(&format!("categories.{name}.feedback"), &category.feedback)?;
    check_text(&format!("categories.{name}.fix"), &category.fix)?;
    Ok(())
}

fn check_check(name: &str, check: &SpecificCheck) -> Result<()> {
    check_text(&format!("checks.{name}.label"), &check.label)?;
    check_text(&format!("checks.{name}.details"), &check.details)?;
    check_text(&format!("checks.{name}.fix"), &check.fix)?;
    Ok(())
}
