use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use crate::article::ArticleUpdate;
use crate::client::{ArticleStore, ContentParser, Summarizer};
use crate::config::AppConfig;
use crate::Result;

use super::stats::SweepStats;

/// Articles checked within this many seconds are left alone
const MIN_CHECK_INTERVAL_SECS: i64 = 600;

const MS_PER_DAY: i64 = 86_400_000;

/// Whether an article's last check is stale enough to refresh
///
/// The elapsed duration is floor-divided into whole days plus a seconds
/// remainder in 0..86400. Anything checked within the last ten minutes is
/// left alone, as is anything whose last check lies a full day or more
/// back; only the window between the two is refreshed. A last check in the
/// future gives a negative day component and counts as due.
pub fn is_refresh_due(now: DateTime<Utc>, last_modified: DateTime<Utc>) -> bool {
    let elapsed_ms = now.signed_duration_since(last_modified).num_milliseconds();
    let days = elapsed_ms.div_euclid(MS_PER_DAY);
    let secs = elapsed_ms.rem_euclid(MS_PER_DAY) / 1000;

    !((secs < MIN_CHECK_INTERVAL_SECS && days == 0) || days > 0)
}

/// Sweeps the article store once, re-parsing stale articles and writing
/// refreshed hashes and summaries back
pub struct UpdateService {
    store: ArticleStore,
    parser: ContentParser,
    summarizer: Summarizer,
}

impl UpdateService {
    pub fn new(store: ArticleStore, parser: ContentParser, summarizer: Summarizer) -> Self {
        Self {
            store,
            parser,
            summarizer,
        }
    }

    /// Build the service and its HTTP clients from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.http.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            store: ArticleStore::new(client.clone(), &config.services.store_url)?,
            parser: ContentParser::new(client.clone(), &config.services.parser_url)?,
            summarizer: Summarizer::new(client, &config.services.summarizer_url)?,
        })
    }

    /// Run one sweep to completion, logging the outcome
    ///
    /// Consumes the service; the trigger endpoint spawns this and keeps no
    /// handle to it.
    pub async fn run(self) {
        if let Err(e) = self.sweep().await {
            error!("Update run aborted: {}", e);
        }
    }

    /// One pass over every article in the store
    ///
    /// A failed listing or an unparseable timestamp aborts the sweep;
    /// parser, summarizer, and store-write failures skip only the article
    /// they struck.
    pub async fn sweep(&self) -> Result<SweepStats> {
        let started = Instant::now();

        let articles = self.store.list_articles().await?;
        info!("Checking {} articles for updates", articles.len());

        let mut stats = SweepStats::new();

        for article in &articles {
            let last_modified = article.parse_last_modified()?;
            if !is_refresh_due(Utc::now(), last_modified) {
                continue;
            }

            let content = match self.parser.parse(article).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping article {}: content parse failed: {}", article.id, e);
                    continue;
                }
            };

            if content.article_hash == article.article_hash {
                if let Some(status) = self
                    .push_update("unchanged", article.id, &article.unchanged_update())
                    .await
                {
                    stats.record_unchanged(status);
                }
            } else {
                let summary = match self.summarizer.summarize(&content.article_text).await {
                    Ok(summary) => summary,
                    Err(e) => {
                        warn!("Skipping article {}: summarization failed: {}", article.id, e);
                        continue;
                    }
                };

                let update = ArticleUpdate::resummarized(&summary, &content.article_hash);
                if let Some(status) = self.push_update("changed", article.id, &update).await {
                    stats.record_changed(status);
                }
            }
        }

        info!("Store responses (unchanged articles): {:?}", stats.unchanged);
        info!("Store responses (changed articles): {:?}", stats.changed);

        let elapsed = started.elapsed();
        info!(
            "Elapsed time: {} min {} sec",
            elapsed.as_secs() / 60,
            elapsed.as_secs() % 60
        );

        Ok(stats)
    }

    /// Issue one store update and log its status
    ///
    /// Returns None when the request itself failed, so the caller records
    /// nothing for that article.
    async fn push_update(
        &self,
        kind: &str,
        article_id: i64,
        update: &ArticleUpdate,
    ) -> Option<StatusCode> {
        match self.store.update_article(article_id, update).await {
            Ok(status) => {
                log_store_response(kind, article_id, status);
                Some(status)
            }
            Err(e) => {
                warn!("Skipping article {}: store update failed: {}", article_id, e);
                None
            }
        }
    }
}

/// Log one store response with a severity operators can filter on
fn log_store_response(kind: &str, article_id: i64, status: StatusCode) {
    if status.is_success() {
        info!("({}) store responded {} for article {}", kind, status, article_id);
    } else if status == StatusCode::BAD_REQUEST {
        warn!(
            "({}) store responded {} for article {}, possibly missing data",
            kind, status, article_id
        );
    } else if status.is_server_error() {
        error!("({}) store responded {} for article {}", kind, status, article_id);
    } else {
        warn!(
            "({}) unusual store response {} for article {}",
            kind, status, article_id
        );
    }
}
