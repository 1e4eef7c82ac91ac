use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const SERVICE_NAME: &str = "summarizer";

#[derive(Serialize)]
struct SummarizeRequest {
    article_text: String,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Client for the summarizer service
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: Client,
    base_url: String,
}

impl Summarizer {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Generate a summary for freshly extracted article text
    pub async fn summarize(&self, article_text: &str) -> Result<String> {
        let request = SummarizeRequest {
            article_text: article_text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/summarize", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                service: SERVICE_NAME,
                status,
                body,
            });
        }

        let parsed: SummarizeResponse = serde_json::from_str(&body)?;
        Ok(parsed.summary)
    }
}
