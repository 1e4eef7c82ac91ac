use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the article store,
/// e.g. "Mon, 02 Jan 2006 15:04:05 GMT"
pub const LAST_MODIFIED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// An article record as returned by the article store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub domain: String,
    pub article_url: String,
    pub amp_url: String,
    pub last_modified: String,
    pub article_hash: String,
    pub summary_s: String,
    pub summary_m: String,
    pub summary_l: String,
}

/// Fields written back to the store when an article is refreshed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub summary_s: String,
    pub summary_m: String,
    pub summary_l: String,
    pub article_hash: String,
}

impl Article {
    /// Parse the stored last-modified timestamp
    ///
    /// The timezone token is textual only; the wall time is taken as UTC.
    pub fn parse_last_modified(&self) -> crate::Result<DateTime<Utc>> {
        let parsed = NaiveDateTime::parse_from_str(&self.last_modified, LAST_MODIFIED_FORMAT)?;
        Ok(parsed.and_utc())
    }

    /// Update payload that re-asserts the stored summaries and hash,
    /// refreshing only the store-side timestamp
    pub fn unchanged_update(&self) -> ArticleUpdate {
        ArticleUpdate {
            summary_s: self.summary_s.clone(),
            summary_m: self.summary_m.clone(),
            summary_l: self.summary_l.clone(),
            article_hash: self.article_hash.clone(),
        }
    }
}

impl ArticleUpdate {
    /// Update payload for changed content; the single fresh summary fills
    /// all three variants
    pub fn resummarized(summary: &str, article_hash: &str) -> Self {
        Self {
            summary_s: summary.to_string(),
            summary_m: summary.to_string(),
            summary_l: summary.to_string(),
            article_hash: article_hash.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        Article {
            id: 7,
            domain: "example.com".to_string(),
            article_url: "https://example.com/a".to_string(),
            amp_url: "https://example.com/amp/a".to_string(),
            last_modified: "Mon, 02 Jan 2006 15:04:05 GMT".to_string(),
            article_hash: "abc123".to_string(),
            summary_s: "short".to_string(),
            summary_m: "medium".to_string(),
            summary_l: "long".to_string(),
        }
    }

    #[test]
    fn test_parse_last_modified_as_utc() {
        let article = sample_article();
        let parsed = article.parse_last_modified().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn test_parse_last_modified_rejects_garbage() {
        let mut article = sample_article();
        article.last_modified = "2006-01-02T15:04:05Z".to_string();
        assert!(article.parse_last_modified().is_err());
    }

    #[test]
    fn test_unchanged_update_preserves_fields() {
        let article = sample_article();
        let update = article.unchanged_update();
        assert_eq!(update.summary_s, "short");
        assert_eq!(update.summary_m, "medium");
        assert_eq!(update.summary_l, "long");
        assert_eq!(update.article_hash, "abc123");
    }

    #[test]
    fn test_resummarized_fills_all_variants() {
        let update = ArticleUpdate::resummarized("fresh", "def456");
        assert_eq!(update.summary_s, "fresh");
        assert_eq!(update.summary_m, "fresh");
        assert_eq!(update.summary_l, "fresh");
        assert_eq!(update.article_hash, "def456");
    }

    #[test]
    fn test_article_deserializes_store_payload() {
        let json = r#"{
            "id": 1,
            "domain": "example.com",
            "article_url": "https://example.com/a",
            "amp_url": "https://example.com/amp/a",
            "last_modified": "Mon, 02 Jan 2006 15:04:05 GMT",
            "article_hash": "abc123",
            "summary_s": "s",
            "summary_m": "m",
            "summary_l": "l"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 1);
        assert_eq!(article.article_hash, "abc123");
    }

    #[test]
    fn test_update_serializes_expected_keys() {
        let update = ArticleUpdate::resummarized("text", "hash");
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"summary_s\""));
        assert!(json.contains("\"summary_m\""));
        assert!(json.contains("\"summary_l\""));
        assert!(json.contains("\"article_hash\""));
    }
}
