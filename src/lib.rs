//! # NYT Wire
//!
//! A small client for the New York Times archive and article search APIs,
//! paired with a helper that downloads an article page and extracts a
//! readable title and body text.
//!
//! ## Components
//!
//! - [`client::NytClient`]: builds request URLs against the archive/search
//!   API, issues the GET, and returns the raw list of article records.
//! - [`models::format_article`]: flattens one raw record into a fixed set
//!   of display fields.
//! - [`content::fetch_article_content`]: downloads an article page and
//!   extracts title and body text.
//!
//! The components share no state; callers invoke them in sequence. All
//! network operations are `async` and awaited one at a time — there is no
//! fan-out and no cross-call coordination.
//!
//! ## Usage
//!
//! ```ignore
//! use nyt_wire::{NytClient, SearchOptions, format_article, fetch_article_content};
//!
//! let client = NytClient::new(std::env::var("NYT_API_KEY")?);
//! let options = SearchOptions {
//!     begin_date: Some("20241101".to_string()),
//!     end_date: Some("20241111".to_string()),
//!     ..Default::default()
//! };
//! let docs = client.search_articles("United States Politics and Government", &options).await?;
//! for doc in &docs {
//!     let article = format_article(doc)?;
//!     let content = fetch_article_content(&article.web_url).await?;
//!     println!("{}\n\n{}", content.title, content.text);
//! }
//! ```

pub mod client;
pub mod content;
pub mod error;
pub mod models;

pub use client::{DEFAULT_API_BASE, NytClient, SearchOptions, SortOrder};
pub use content::{ArticleContent, fetch_article_content};
pub use error::{Error, Result};
pub use models::{ArticleRecord, FormattedArticle, Headline, Keyword, format_article};
