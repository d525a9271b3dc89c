use serde_json::json;

use crate::{
    error::{AuditError, Result},
    ingest::EncodedPayload,
    schema,
};

/// Default Gemini model used for critiques.
pub static DEFAULT_MODEL: &str = "gemini-2.5-flash";

static API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
static API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// A backend that turns an encoded video into raw structured critique text.
/// The session is generic over this so tests can substitute a fake engine.
pub trait InferenceBackend: Send + Sync {
    /// Submit the encoded video and return the engine's raw structured text.
    /// Exactly one request per invocation: no retries, no caching.
    async fn analyze(&self, payload: &EncodedPayload) -> Result<String>;
}

/// Gemini `generateContent` client. Holds its credential explicitly; nothing
/// reads the environment after construction.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the API key from `GEMINI_API_KEY` once, at startup.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var(API_KEY_ENV_VAR).map_err(|_| AuditError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl InferenceBackend for GeminiClient {
    async fn analyze(&self, payload: &EncodedPayload) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "systemInstruction": { "parts": [{ "text": schema::SYSTEM_INSTRUCTION }] },
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": payload.mime_type, "data": payload.data } },
                        { "text": schema::TRIGGER_PROMPT },
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": schema::response_schema(),
                },
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let text = response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(AuditError::EmptyResponse)?;

        Ok(text.to_string())
    }
}
