use serde::{Deserialize, Serialize};

/// Inbound body for `POST /api/generate`. The prompt is forwarded to the
/// generator as-is; an empty string is accepted.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Outbound body: the generated snippets as one opaque string, or an
/// error sentinel. Always returned with HTTP 200.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub code: String,
}
