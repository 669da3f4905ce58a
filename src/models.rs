//! Data models for articles returned by the NYT archive and search APIs.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`ArticleRecord`]: One article as returned by the archive or search
//!   endpoint. Only the fields this crate reads are declared; everything
//!   else the API sends is preserved in `extra` so records round-trip
//!   unmodified.
//! - [`FormattedArticle`]: A flattened, display-ready derivative of an
//!   [`ArticleRecord`] produced by [`format_article`].
//!
//! Field names are snake_case to match the JSON the API emits, with
//! `abstract` renamed because it is a Rust keyword.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A raw article record from the archive or search endpoint.
///
/// The API returns large nested documents; the declared fields are the ones
/// [`format_article`] needs. All of them are optional at the type level
/// because the API omits fields freely — the formatter is where "required"
/// is enforced, so a partial record can still be listed and inspected.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ArticleRecord {
    /// Nested headline object; `headline.main` is the display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<Headline>,
    /// One-paragraph summary of the article.
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Canonical URL of the article page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    /// Publication timestamp as an ISO-ish date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    /// Section the article ran in (e.g. "U.S.", "World").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    /// Subject/person/location tags. Absent in some archive records;
    /// `None` and an explicit empty list both re-serialize as served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<Keyword>>,
    /// Every field the API sent that this crate does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The nested `headline` object of an article record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Headline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kicker: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of an article's `keywords` list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Keyword {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// A flattened article with the nested headline and keyword values pulled
/// to the top level. Derived deterministically from one [`ArticleRecord`];
/// never mutated after creation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FormattedArticle {
    pub headline: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub web_url: String,
    pub publish_date: String,
    pub section: String,
    /// Keyword values in the order the API listed them.
    pub keywords: Vec<String>,
}

/// Flatten one [`ArticleRecord`] into a [`FormattedArticle`].
///
/// Pure and deterministic. Fails with [`Error::MalformedRecord`] naming the
/// first absent required field; `keywords` is never required and defaults
/// to an empty list.
pub fn format_article(record: &ArticleRecord) -> Result<FormattedArticle> {
    let headline = record
        .headline
        .as_ref()
        .and_then(|h| h.main.as_deref())
        .ok_or(Error::MalformedRecord {
            field: "headline.main",
        })?;
    let abstract_text = record
        .abstract_text
        .as_deref()
        .ok_or(Error::MalformedRecord { field: "abstract" })?;
    let web_url = record
        .web_url
        .as_deref()
        .ok_or(Error::MalformedRecord { field: "web_url" })?;
    let publish_date = record
        .pub_date
        .as_deref()
        .ok_or(Error::MalformedRecord { field: "pub_date" })?;
    let section = record
        .section_name
        .as_deref()
        .ok_or(Error::MalformedRecord {
            field: "section_name",
        })?;

    Ok(FormattedArticle {
        headline: headline.to_string(),
        abstract_text: abstract_text.to_string(),
        web_url: web_url.to_string(),
        publish_date: publish_date.to_string(),
        section: section.to_string(),
        keywords: record
            .keywords
            .iter()
            .flatten()
            .map(|k| k.value.clone())
            .collect(),
    })
}
