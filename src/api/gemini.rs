use crate::error::AppError;
use crate::types::gemini::{GenerateContentRequest, GenerateContentResponse};
use url::Url;

/// Stateless calls to the generative-language API.
pub struct GeminiApi;

impl GeminiApi {
    /// POST `models/{model}:generateContent` and return the reply text.
    /// One attempt, no retries; a slow upstream blocks only this request.
    pub async fn generate_content(
        client: &reqwest::Client,
        base_url: &Url,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, AppError> {
        let url = endpoint_url(base_url, model)?;
        let body = GenerateContentRequest::from_prompt(prompt);

        let resp = client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateContentResponse = resp.json().await?;
        payload.text().ok_or(AppError::EmptyGeneration)
    }
}

fn endpoint_url(base: &Url, model: &str) -> Result<Url, AppError> {
    // Url::join would drop the last path segment of a base without a
    // trailing slash, so build the full path by hand.
    let full = format!(
        "{}/models/{}:generateContent",
        base.as_str().trim_end_matches('/'),
        model
    );
    Ok(Url::parse(&full)?)
}
