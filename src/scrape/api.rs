// src/scrape/api.rs

use anyhow::{bail, ensure, Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::{fmt, future::Future};
use url::Url;

/// The API refused further requests for this key. Fatal for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimited {
    pub status: u16,
}

impl fmt::Display for RateLimited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "article search answered HTTP {}: API key rate limit most likely exceeded",
            self.status
        )
    }
}

impl std::error::Error for RateLimited {}

/// Anything that can count the articles matching a term in one year.
pub trait HitSource {
    fn hits(&self, term: &str, year: i32) -> impl Future<Output = Result<u64>> + Send;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    response: Option<SearchBody>,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    meta: SearchMeta,
}

#[derive(Debug, Deserialize)]
struct SearchMeta {
    hits: u64,
}

/// Article search API client.
#[derive(Debug, Clone)]
pub struct ArticleSearch {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ArticleSearch {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Query for `term` restricted to the calendar year.
    pub fn request_url(&self, term: &str, year: i32) -> Result<Url> {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            bail!("year {} out of range", year);
        };
        let begin = first.format("%Y%m%d").to_string();
        let end = last.format("%Y%m%d").to_string();
        Url::parse_with_params(
            &self.base_url,
            &[
                ("q", term),
                ("begin_date", begin.as_str()),
                ("end_date", end.as_str()),
                ("api-key", self.api_key.as_str()),
            ],
        )
        .with_context(|| format!("building search URL from {}", self.base_url))
    }
}

impl HitSource for ArticleSearch {
    async fn hits(&self, term: &str, year: i32) -> Result<u64> {
        let url = self.request_url(term, year)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("search request for {:?} {}", term, year))?;

        let status = resp.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RateLimited {
                status: status.as_u16(),
            }
            .into());
        }
        let body = resp
            .error_for_status()
            .with_context(|| format!("search for {:?} {}", term, year))?
            .text()
            .await
            .context("reading search response body")?;
        parse_hits(&body)
    }
}

/// Extract `response.meta.hits` from a search response.
pub fn parse_hits(body: &str) -> Result<u64> {
    let parsed: SearchResponse = serde_json::from_str(body).context("decoding search response")?;
    ensure!(parsed.status == "OK", "search status was {:?}", parsed.status);
    let body = parsed.response.context("search response without a body")?;
    Ok(body.meta.hits)
}

/// True when `err` carries a [`RateLimited`] anywhere in its chain.
pub fn is_rate_limited(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.downcast_ref::<RateLimited>().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_query_dates_and_key() -> Result<()> {
        let api = ArticleSearch::new("http://api.nytimes.com/svc/search/v2/articlesearch.json", "secret");
        let url = api.request_url("Côte d'Ivoire", 1985)?;
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Côte d'Ivoire".to_string()),
                ("begin_date".to_string(), "19850101".to_string()),
                ("end_date".to_string(), "19851231".to_string()),
                ("api-key".to_string(), "secret".to_string()),
            ]
        );
        assert_eq!(url.path(), "/svc/search/v2/articlesearch.json");
        Ok(())
    }

    #[test]
    fn hits_come_from_response_meta() -> Result<()> {
        let body = r#"{"status":"OK","copyright":"x","response":{"docs":[],"meta":{"hits":1234,"offset":0}}}"#;
        assert_eq!(parse_hits(body)?, 1234);
        assert!(parse_hits(r#"{"status":"ERROR","errors":["bad"]}"#).is_err());
        assert!(parse_hits("<html>").is_err());
        Ok(())
    }

    #[test]
    fn rate_limit_is_detected_through_context() {
        let err = anyhow::Error::new(RateLimited { status: 403 }).context("year 1990");
        assert!(is_rate_limited(&err));
        assert!(!is_rate_limited(&anyhow::anyhow!("timeout")));
    }
}
