//! Snippet generation service.
//!
//! Renders the instruction template around the user prompt, issues one
//! completion call, and maps failures to sentinel strings. The upstream
//! content is expected to be a JSON object with one snippet per target
//! language, but it is passed through as an opaque string; the caller
//! owns the parse.

use crate::services::providers::{CompletionProvider, ProviderError};
use std::sync::Arc;

/// Returned when the upstream call succeeded but carried no choices.
const NO_RESPONSE_SENTINEL: &str = "Error: No response from AI.";

/// Returned when the upstream call failed; details go to the log.
const CALL_FAILED_SENTINEL: &str = "Error: Failed to call AI. Check backend logs.";

/// Instruction template. The user prompt is appended after the trailing
/// `User Request:` line.
const PROMPT_TEMPLATE: &str = r#"You are an expert code generator. A user has provided a request.
Convert this request into a clean, copy-paste-ready code snippet
for each of the following languages/libraries:
1. JavaScript (using fetch)
2. JavaScript (using axios)
3. Java (using Spring WebClient)
4. Python (using requests)

CRITICAL: Return *only* a valid JSON object.
Do not provide any explanation, intro, or markdown "```json" tags.

The JSON object must have these exact keys:
"javascriptFetch"
"javascriptAxios"
"javaSpring"
"pythonRequests"

IMPORTANT: The *value* for each key MUST be a single string
containing the complete, runnable code snippet.
DO NOT return a JSON object as the value for a key.

User Request:
"#;

#[derive(Clone)]
pub struct CodeGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl CodeGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate snippets for the given user prompt.
    ///
    /// Always returns a string: the trimmed content of the first upstream
    /// choice, or a sentinel. Never escalates an error to the caller.
    pub async fn generate_code(&self, user_prompt: &str) -> String {
        let rendered = render_prompt(user_prompt);

        match self.provider.complete(&rendered).await {
            Ok(response) => match response.text {
                Some(content) => content.trim().to_string(),
                None => NO_RESPONSE_SENTINEL.to_string(),
            },
            Err(e) => {
                tracing::error!(error = %e, "Error calling OpenAI API");
                CALL_FAILED_SENTINEL.to_string()
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

/// Substitute the user prompt into the instruction template.
fn render_prompt(user_prompt: &str) -> String {
    format!("{}{}", PROMPT_TEMPLATE, user_prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockCompletionProvider;

    fn generator(provider: MockCompletionProvider) -> CodeGenerator {
        CodeGenerator::new(Arc::new(provider))
    }

    #[test]
    fn rendered_prompt_contains_user_text_verbatim() {
        let rendered = render_prompt("GET https://api.example.com/users");
        assert!(rendered.ends_with("User Request:\nGET https://api.example.com/users"));
    }

    #[test]
    fn rendered_prompt_names_all_four_output_keys() {
        let rendered = render_prompt("anything");
        for key in [
            "javascriptFetch",
            "javascriptAxios",
            "javaSpring",
            "pythonRequests",
        ] {
            assert!(rendered.contains(key), "missing key {}", key);
        }
    }

    #[test]
    fn empty_prompt_is_forwarded_unmodified() {
        let rendered = render_prompt("");
        assert!(rendered.ends_with("User Request:\n"));
    }

    #[tokio::test]
    async fn first_choice_content_is_trimmed_and_passed_through() {
        let gen = generator(MockCompletionProvider::replying(
            " {\"javascriptFetch\":\"...\"} ",
        ));
        let code = gen.generate_code("GET https://api.example.com/users").await;
        assert_eq!(code, "{\"javascriptFetch\":\"...\"}");
    }

    #[tokio::test]
    async fn empty_choice_list_maps_to_no_response_sentinel() {
        let gen = generator(MockCompletionProvider::empty());
        let code = gen.generate_code("anything").await;
        assert_eq!(code, "Error: No response from AI.");
    }

    #[tokio::test]
    async fn provider_failure_maps_to_call_failed_sentinel() {
        let gen = generator(MockCompletionProvider::failing());
        let code = gen.generate_code("anything").await;
        assert_eq!(code, "Error: Failed to call AI. Check backend logs.");
    }
}
