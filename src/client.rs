//! Client for the NYT archive and article search endpoints.
//!
//! [`NytClient`] builds correctly-encoded request URLs, issues the GET, and
//! unwraps the `response.docs` list out of the JSON envelope both endpoints
//! share. Every call is independent; the client holds only the API key, the
//! API base, and a reusable HTTP client.
//!
//! # Endpoints
//!
//! - Archive: `{base}/archive/v1/{year}/{month}.json?api-key={key}`
//! - Search: `{base}/search/v2/articlesearch.json?api-key={key}&q={query}&page={page}&sort={sort}[&begin_date=…][&end_date=…]`
//!
//! The API base defaults to the production service and can be overridden,
//! which is also how the integration tests point the client at a mock server.

use serde::Deserialize;
use tracing::{error, info, instrument, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::models::ArticleRecord;

/// Production API root. Override with [`NytClient::with_api_base`].
pub const DEFAULT_API_BASE: &str = "https://api.nytimes.com/svc";

/// Result ordering for the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Relevance,
}

impl SortOrder {
    /// The value the search endpoint expects in the `sort` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Relevance => "relevance",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`NytClient::search_articles`].
///
/// `begin_date` and `end_date` take `YYYYMMDD` strings and are omitted from
/// the query string entirely when unset — the API distinguishes an absent
/// parameter from an empty one.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Zero-based result page.
    pub page: u32,
    pub sort: SortOrder,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
}

/// Client for the archive and article search APIs.
///
/// Holds a single credential for its lifetime and no other state; calls may
/// be issued in any order and carry no session.
///
/// # Example
///
/// ```ignore
/// let client = NytClient::new(std::env::var("NYT_API_KEY")?);
/// let docs = client.get_archive(2024, 11).await?;
/// ```
#[derive(Debug, Clone)]
pub struct NytClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl NytClient {
    /// Create a client against the production API base.
    ///
    /// Supply the key from configuration (environment or CLI).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different API root, e.g. a stub server in tests.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Use a caller-configured HTTP client (custom timeout, proxy, etc.).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch all articles published in the given year and month.
    ///
    /// Year/month bounds are not validated locally; the API rejects
    /// out-of-range months itself.
    #[instrument(level = "info", skip(self))]
    pub async fn get_archive(&self, year: i32, month: u32) -> Result<Vec<ArticleRecord>> {
        let url = self.archive_url(year, month)?;
        match self.fetch_docs(url).await {
            Ok(docs) => {
                info!(year, month, count = docs.len(), "Fetched archive docs");
                Ok(docs)
            }
            Err(e) => {
                error!(year, month, error = %e, "Archive fetch failed");
                Err(e)
            }
        }
    }

    /// Search articles by keyword with optional paging, ordering, and date
    /// range.
    ///
    /// Empty or whitespace queries are passed through; their semantics are
    /// the API's business.
    #[instrument(level = "info", skip(self, options), fields(%query))]
    pub async fn search_articles(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ArticleRecord>> {
        let url = self.search_url(query, options)?;
        match self.fetch_docs(url).await {
            Ok(docs) => {
                info!(count = docs.len(), "Search returned docs");
                Ok(docs)
            }
            Err(e) => {
                error!(error = %e, "Search failed");
                Err(e)
            }
        }
    }

    fn archive_url(&self, year: i32, month: u32) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/archive/v1/{}/{}.json",
            self.api_base.trim_end_matches('/'),
            year,
            month
        ))?;
        url.query_pairs_mut().append_pair("api-key", &self.api_key);
        Ok(url)
    }

    fn search_url(&self, query: &str, options: &SearchOptions) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/search/v2/articlesearch.json",
            self.api_base.trim_end_matches('/')
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-key", &self.api_key);
            pairs.append_pair("q", query);
            pairs.append_pair("page", &options.page.to_string());
            pairs.append_pair("sort", options.sort.as_str());
            if let Some(begin) = &options.begin_date {
                pairs.append_pair("begin_date", begin);
            }
            if let Some(end) = &options.end_date {
                pairs.append_pair("end_date", end);
            }
        }
        Ok(url)
    }

    /// Issue one API GET and unwrap `response.docs`.
    ///
    /// Both endpoints share this request/response shape, so the public
    /// operations are thin wrappers over it with different URL builders.
    async fn fetch_docs(&self, url: Url) -> Result<Vec<ArticleRecord>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                %status,
                body_preview = %truncate_for_log(&body, 200),
                "API returned non-success status"
            );
            return Err(Error::RemoteRequest { status, body });
        }

        let envelope: ApiEnvelope = serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("invalid JSON body: {e}")))?;
        envelope
            .response
            .and_then(|r| r.docs)
            .ok_or_else(|| Error::MalformedResponse("missing `response.docs`".to_string()))
    }
}

/// JSON envelope both endpoints wrap their docs in.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    response: Option<ApiResponse>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    docs: Option<Vec<ArticleRecord>>,
}

/// Truncate a response body for logging purposes.
///
/// Bodies come from an arbitrary remote, so the cut point walks back to a
/// char boundary rather than slicing at a raw byte offset.
fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NytClient {
        NytClient::new("test-key")
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_archive_url_path_and_key() {
        let url = client().archive_url(2024, 11).unwrap();

        assert!(url.path().contains("/archive/v1/2024/11.json"));
        assert_eq!(
            query_pairs(&url),
            vec![("api-key".to_string(), "test-key".to_string())]
        );
    }

    #[test]
    fn test_archive_url_respects_base_override() {
        let url = client()
            .with_api_base("http://127.0.0.1:8080/svc/")
            .archive_url(1999, 1)
            .unwrap();

        assert_eq!(url.path(), "/svc/archive/v1/1999/1.json");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
    }

    #[test]
    fn test_search_url_defaults_omit_dates() {
        let url = client()
            .search_url("climate", &SearchOptions::default())
            .unwrap();
        let pairs = query_pairs(&url);

        assert!(url.path().ends_with("/search/v2/articlesearch.json"));
        assert!(pairs.contains(&("api-key".to_string(), "test-key".to_string())));
        assert!(pairs.contains(&("q".to_string(), "climate".to_string())));
        assert!(pairs.contains(&("page".to_string(), "0".to_string())));
        assert!(pairs.contains(&("sort".to_string(), "newest".to_string())));
        assert!(pairs.iter().all(|(k, _)| k != "begin_date" && k != "end_date"));
    }

    #[test]
    fn test_search_url_includes_dates_exactly_once() {
        let options = SearchOptions {
            begin_date: Some("20241101".to_string()),
            end_date: Some("20241111".to_string()),
            ..Default::default()
        };
        let url = client().search_url("election", &options).unwrap();
        let pairs = query_pairs(&url);

        assert_eq!(
            pairs.iter().filter(|(k, _)| k == "begin_date").count(),
            1
        );
        assert_eq!(pairs.iter().filter(|(k, _)| k == "end_date").count(), 1);
        assert!(pairs.contains(&("begin_date".to_string(), "20241101".to_string())));
        assert!(pairs.contains(&("end_date".to_string(), "20241111".to_string())));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = client()
            .search_url(
                "United States Politics and Government",
                &SearchOptions::default(),
            )
            .unwrap();

        assert!(!url.as_str().contains(' '));
        let pairs = query_pairs(&url);
        assert!(pairs.contains(&(
            "q".to_string(),
            "United States Politics and Government".to_string()
        )));
    }

    #[test]
    fn test_search_url_page_and_sort() {
        let options = SearchOptions {
            page: 3,
            sort: SortOrder::Oldest,
            ..Default::default()
        };
        let url = client().search_url("x", &options).unwrap();
        let pairs = query_pairs(&url);

        assert!(pairs.contains(&("page".to_string(), "3".to_string())));
        assert!(pairs.contains(&("sort".to_string(), "oldest".to_string())));
    }

    #[test]
    fn test_sort_order_wire_strings() {
        assert_eq!(SortOrder::Newest.as_str(), "newest");
        assert_eq!(SortOrder::Oldest.as_str(), "oldest");
        assert_eq!(SortOrder::Relevance.as_str(), "relevance");
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 100), "short");
        let long = "a".repeat(500);
        let result = truncate_for_log(&long, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_boundary() {
        // A multibyte character straddling the cut point must not panic.
        let body = format!("{}é — service unavailable", "a".repeat(199));
        let result = truncate_for_log(&body, 200);
        assert!(result.starts_with(&"a".repeat(199)));
        assert!(result.contains("…(+"));

        let emoji = "⚠".repeat(100);
        let result = truncate_for_log(&emoji, 10);
        assert!(result.starts_with('⚠'));
    }
}
