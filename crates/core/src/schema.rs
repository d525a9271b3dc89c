//! The fixed contract for the inference call: the critique persona, the
//! trigger prompt, and the response schema the engine must emit.

use std::sync::LazyLock;

use serde_json::{Value, json};

pub static SYSTEM_INSTRUCTION: &str = r#"
You are a brutal Direct Response Creative Director.

Analyze the video based on these pillars:
1. Visuals
2. Audio
3. Copy

Also check specifically for:
1. Complexity (Keep it 8th grade reading level or lower).
2. Storytelling (Customer=Hero, Provider=Guide, Product=Solution).
3. The Hook (First 3 seconds).
4. Caption visibility and Copy visibility.
5. Technical quality (Audio/Visual).
6. Pacing (Is it boring? Too slow? Too fast?).
7. Pain Point (Does it clearly address a user problem?).
8. CTA (Is the Call to Action clear and strong?).

CRITICAL INSTRUCTIONS:
- Be specific. Reference timestamps (e.g., "At 0:04, the pacing drops").
- Be direct and brutally harsh. Don't sugarcoat.
- Do not use curse words, but be aggressive in your critique.
- Do not give generic advice.
- Be extremely clear with the advice.
- Always maintain a 8th grade reading level in your output.
- IMPORTANT: For every specific check (Hook, CTA, etc.), you MUST provide a "fix" field.
  - If status is FAIL or WARN: Provide a brief, simple, and actionable instruction.
  - If status is PASS: Return "None".
- IMPORTANT: For the main categories (Visual, Audio, Copy), if the score is below 80,
  you MUST provide a "fix" field with brief, actionable advice. If 80 or above, return "None".
"#;

pub static TRIGGER_PROMPT: &str =
    "Analyze this ad video. Be brutal. Follow the JSON schema strictly.";

static RESPONSE_SCHEMA: LazyLock<Value> = LazyLock::new(build_response_schema);

/// The process-wide output-shape constraint, in the Gemini schema dialect.
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

fn category_schema(topic: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER", "description": "Score 0-100" },
            "feedback": { "type": "STRING", "description": format!("Specific critique on {topic}") },
            "fix": { "type": "STRING", "description": "Actionable fix if score < 80, else 'None'" }
        },
        "required": ["score", "feedback", "fix"]
    })
}

fn check_schema(label: &str, details: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "label": { "type": "STRING", "enum": [label] },
            "status": { "type": "STRING", "enum": ["PASS", "FAIL", "WARN"] },
            "details": { "type": "STRING", "description": details },
            "fix": { "type": "STRING", "description": "Brief actionable fix if status is FAIL/WARN, else 'None'" }
        },
        "required": ["label", "status", "details", "fix"]
    })
}

fn build_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": { "type": "INTEGER", "description": "Overall score out of 100" },
            "brutalSummary": { "type": "STRING", "description": "A harsh, direct summary of the ad's performance potential." },
            "categories": {
                "type": "OBJECT",
                "properties": {
                    "visual": category_schema("visuals"),
                    "audio": category_schema("audio"),
                    "copy": category_schema("copy/script"),
                },
                "required": ["visual", "audio", "copy"]
            },
            "checks": {
                "type": "OBJECT",
                "properties": {
                    "complexity": check_schema("Complexity", "Reading level analysis"),
                    "storytelling": check_schema("Storytelling", "Hero/Guide/Solution framework check"),
                    "hook": check_schema("Hook", "Is the first 3s compelling?"),
                    "captions": check_schema("Captions", "Are captions present and readable?"),
                    "copyVisibility": check_schema("Copy Visibility", "Is on-screen text legible?"),
                    "visualQuality": check_schema("Visual Quality", "Resolution, lighting, coloring"),
                    "audioQuality": check_schema("Audio Quality", "Clear voiceover, balanced music"),
                    "pacing": check_schema("Pacing", "Is the flow fast/engaging?"),
                    "painPoint": check_schema("Pain Point", "Is the customer problem clear?"),
                    "cta": check_schema("Call to Action", "Is the next step clear?"),
                },
                "required": [
                    "complexity",
                    "storytelling",
                    "hook",
                    "captions",
                    "copyVisibility",
                    "visualQuality",
                    "audioQuality",
                    "pacing",
                    "painPoint",
                    "cta"
                ]
            },
            "timestampedNotes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "time": { "type": "STRING", "description": "Format MM:SS" },
                        "note": { "type": "STRING", "description": "The specific critique" }
                    },
                    "required": ["time", "note"]
                }
            }
        },
        "required": ["overallScore", "brutalSummary", "categories", "checks", "timestampedNotes"]
    })
}
