use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::{Error, Result};

const SERVICE_NAME: &str = "content parser";

#[derive(Serialize)]
struct ParseRequest {
    domain: String,
    article_url: String,
    amp_url: String,
}

/// Freshly extracted article text and its fingerprint
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedContent {
    pub article_text: String,
    pub article_hash: String,
}

/// Client for the content parser service
#[derive(Debug, Clone)]
pub struct ContentParser {
    client: Client,
    base_url: String,
}

impl ContentParser {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Re-extract the live text and content hash for an article
    pub async fn parse(&self, article: &Article) -> Result<ParsedContent> {
        let request = ParseRequest {
            domain: article.domain.clone(),
            article_url: article.article_url.clone(),
            amp_url: article.amp_url.clone(),
        };

        let response = self
            .client
            .post(format!("{}/parse", self.base_url))
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

        Ok(serde_json::from_str(&body)?)
    }
}
