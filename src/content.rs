//! Readable-text extraction for article pages.
//!
//! Given an article URL, download the page and pull a human-readable title
//! and body text out of the HTML. The title comes from the `og:title` meta
//! tag when present, falling back to `<title>` and then the first `<h1>`.
//! Body text is the page's paragraphs, scoped to `<article>` when the page
//! has one so navigation and footer text stay out of the result.
//!
//! Extraction is split into [`fetch_article_content`] (network) and
//! [`extract_content`] (pure), so the HTML handling is testable without a
//! server.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{info, instrument, warn};
use url::Url;

use crate::error::{Error, Result};

static OG_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static ARTICLE_P_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("article p").unwrap());
static ANY_P_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Readable title and body text extracted from one article page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub text: String,
}

/// Download an article page and extract its readable content.
///
/// The URL must be a well-formed `http`/`https` URL. Malformed URLs,
/// unreachable pages, non-success statuses, and pages with nothing readable
/// all fail with [`Error::ContentFetch`] naming the cause. No retries.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article_content(url: &str) -> Result<ArticleContent> {
    let parsed = Url::parse(url).map_err(|e| fetch_failure(url, format!("invalid URL: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(fetch_failure(
            url,
            format!("unsupported URL scheme `{}`", parsed.scheme()),
        ));
    }

    let response = reqwest::get(parsed)
        .await
        .map_err(|e| fetch_failure(url, format!("request failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_failure(url, format!("HTTP {status}")));
    }
    let html = response
        .text()
        .await
        .map_err(|e| fetch_failure(url, format!("failed reading body: {e}")))?;

    let content = extract_content(&html, url)?;
    info!(
        title = %content.title,
        text_bytes = content.text.len(),
        "Extracted article content"
    );
    Ok(content)
}

/// Extract a title and body text from already-downloaded HTML.
///
/// Pure; `url` is only used to label errors. Fails when the page yields
/// neither a title nor any paragraph text.
pub fn extract_content(html: &str, url: &str) -> Result<ArticleContent> {
    let document = Html::parse_document(html);

    let title = document
        .select(&OG_TITLE_SELECTOR)
        .find_map(|el| el.value().attr("content"))
        .map(str::to_string)
        .or_else(|| first_text(&document, &TITLE_SELECTOR))
        .or_else(|| first_text(&document, &H1_SELECTOR))
        .map(|t| normalize_whitespace(&t))
        .unwrap_or_default();

    let mut paragraphs = collect_paragraphs(&document, &ARTICLE_P_SELECTOR);
    if paragraphs.is_empty() {
        paragraphs = collect_paragraphs(&document, &ANY_P_SELECTOR);
    }
    let text = paragraphs.join("\n\n");

    if title.is_empty() && text.is_empty() {
        return Err(fetch_failure(url, "no readable content found".to_string()));
    }
    Ok(ArticleContent { title, text })
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.trim().is_empty())
}

fn collect_paragraphs(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty())
        .collect()
}

fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").into_owned()
}

fn fetch_failure(url: &str, reason: String) -> Error {
    warn!(%url, %reason, "Content fetch failed");
    Error::ContentFetch {
        url: url.to_string(),
        reason,
    }
}
