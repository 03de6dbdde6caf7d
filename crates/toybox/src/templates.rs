//! Canned text responses: weather reports, code-review prompts, and the demo
//! sampling configuration.

use serde::{Deserialize, Serialize};

pub fn weather_report(location: &str) -> String {
    format!("The weather in {location} is sunny!")
}

/// Prompt text asking a model to review and fix `code`.
pub fn review_prompt(code: &str) -> String {
    format!("Please review this code and fix the error:\n{code}")
}

/// Static sampling settings served as a read-only resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f64,
    #[serde(rename = "top-k")]
    pub top_k: u32,
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.6,
            top_k: 1,
            max_tokens: 2048,
        }
    }
}
