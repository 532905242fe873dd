//! HTTP client for the prompt listing endpoints.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::catalog::Prompt;

/// Base path of the listing API. The endpoints are deployed alongside the
/// static bundle, so a relative path reaches them.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, Deserialize)]
pub struct PromptsResponse {
    pub prompts: Vec<Prompt>,
}

/// Transport or protocol failure of a listing request.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError {
            message: err.to_string(),
        }
    }
}

/// Fetch the public prompt listing.
pub async fn fetch_prompts(base_url: &str) -> Result<Vec<Prompt>, ApiError> {
    let url = format!("{}/prompts", base_url.trim_end_matches('/'));
    let response = Request::get(&url).send().await?;

    if !response.ok() {
        return Err(ApiError {
            message: format!("Failed to fetch prompts: {}", response.status()),
        });
    }

    let body: PromptsResponse = response.json().await.map_err(|e| ApiError {
        message: format!("Failed to parse prompts response: {}", e),
    })?;
    Ok(body.prompts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_response_decodes_listing_body() {
        let body = r#"{"prompts":[{"id":"p1","title":"Refactoring Coach","rating":4.5}]}"#;
        let response: PromptsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.prompts.len(), 1);
        assert_eq!(response.prompts[0].id, "p1");
        assert_eq!(response.prompts[0].rating, 4.5);
    }
}
