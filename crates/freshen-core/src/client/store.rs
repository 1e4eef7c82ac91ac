use reqwest::{Client, StatusCode};

use crate::article::{Article, ArticleUpdate};
use crate::{Error, Result};

const SERVICE_NAME: &str = "article store";

/// Client for the article store API
#[derive(Debug, Clone)]
pub struct ArticleStore {
    client: Client,
    base_url: String,
}

impl ArticleStore {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every article currently in the store
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let response = self
            .client
            .get(format!("{}/articles", self.base_url))
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

    /// Write updated fields for one article
    ///
    /// The store's status code is the whole result; non-success codes are
    /// reported back to the caller rather than treated as errors.
    pub async fn update_article(&self, id: i64, update: &ArticleUpdate) -> Result<StatusCode> {
        let response = self
            .client
            .put(format!("{}/articles", self.base_url))
            .query(&[("id", id)])
            .json(update)
            .send()
            .await?;

        Ok(response.status())
    }
}
