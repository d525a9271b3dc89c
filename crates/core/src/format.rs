use crate::types::{CategoryResult, CheckStatus, Critique};

fn push_fix(output: &mut String, fix: Option<&str>) {
    if let Some(fix) = fix {
        output.push_str(&format!("**The Fix:** {}\n\n", fix));
    }
}

fn push_pillar(output: &mut String, title: &str, category: &CategoryResult) {
    output.push_str(&format!("### {} — {}/100\n\n", title, category.score));
    output.push_str(&format!("{}\n\n", category.feedback));
    push_fix(output, category.fix());
}

fn status_marker(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✓",
        CheckStatus::Fail => "✗",
        CheckStatus::Warn => "!",
    }
}

/// Format a critique as human-readable markdown.
pub fn format_critique_readable(critique: &Critique) -> String {
    let mut output = String::new();

    // Verdict
    output.push_str("# Creative Director's Verdict\n\n");
    output.push_str(&format!("**Overall Score:** {}/100\n\n", critique.overall_score));
    output.push_str(&format!("> \"{}\"\n\n", critique.brutal_summary));

    // Pillars
    output.push_str("## Pillars\n\n");
    push_pillar(&mut output, "Visuals", &critique.categories.visual);
    push_pillar(&mut output, "Audio", &critique.categories.audio);
    push_pillar(&mut output, "Copy", &critique.categories.copy);

    // Diagnostic checks
    output.push_str("## Diagnostic Checks\n\n");
    for (_, check) in critique.checks.entries() {
        output.push_str(&format!(
            "{} [{}] {} — {}\n",
            status_marker(check.status),
            check.status.as_str(),
            check.label,
            check.details
        ));
        if let Some(fix) = check.fix() {
            output.push_str(&format!("    Fix: {}\n", fix));
        }
    }
    output.push('\n');

    // Frame-by-frame notes
    if !critique.timestamped_notes.is_empty() {
        output.push_str("## Frame-by-Frame Analysis\n\n");
        for note in &critique.timestamped_notes {
            output.push_str(&format!("• [{}] {}\n", note.time, note.note));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::sample_critique_json;

    fn sample() -> Critique {
        serde_json::from_value(sample_critique_json()).unwrap()
    }

    #[test]
    fn renders_scores_and_feedback() {
        let output = format_critique_readable(&sample());

        assert!(output.contains("**Overall Score:** 42/100"));
        assert!(output.contains("### Visuals — 30/100"));
        assert!(output.contains("The Fix:** Add a 3-second branded intro"));
        assert!(output.contains("[FAIL] Hook"));
        assert!(output.contains("• [00:04] Pacing drops right after the hook."));
    }

    #[test]
    fn never_prints_the_fix_sentinel() {
        let output = format_critique_readable(&sample());
        assert!(!output.contains("Fix: None"));
        assert!(!output.contains("The Fix:** None"));
    }

    #[test]
    fn omits_note_section_when_empty() {
        let mut critique = sample();
        critique.timestamped_notes.clear();
        let output = format_critique_readable(&critique);
        assert!(!output.contains("Frame-by-Frame"));
    }
}
