//! NYT Wire binary: search and archive lookups against the New York Times
//! APIs, plus readable-text extraction for article pages.
//!
//! Operations run strictly in sequence — one request at a time, each awaited
//! to completion. Results are printed as JSON; extracted article text is
//! printed as plain text.

use chrono::Datelike;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use nyt_wire::{NytClient, SearchOptions, fetch_article_content, format_article};

mod cli;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(api_base = ?args.api_base, "Parsed CLI arguments");

    match args.command {
        Command::Search {
            query,
            begin_date,
            end_date,
            page,
            sort,
            limit,
            fetch_content,
        } => {
            let client = build_client(&args.api_key, &args.api_base)?;
            let options = SearchOptions {
                page,
                sort,
                begin_date,
                end_date,
            };
            info!(%query, "Searching articles");
            let docs = client.search_articles(&query, &options).await?;
            info!(count = docs.len(), "Search complete");

            for doc in docs.iter().take(limit) {
                match format_article(doc) {
                    Ok(article) => {
                        println!("{}", serde_json::to_string_pretty(&article)?);
                        if fetch_content {
                            match fetch_article_content(&article.web_url).await {
                                Ok(content) => {
                                    println!("\n{}\n", content.title);
                                    println!("{}\n", content.text);
                                }
                                Err(e) => {
                                    error!(url = %article.web_url, error = %e, "Skipping article content")
                                }
                            }
                        }
                    }
                    Err(e) => error!(error = %e, "Skipping record with missing fields"),
                }
            }
        }

        Command::Archive { year, month } => {
            let client = build_client(&args.api_key, &args.api_base)?;
            let today = chrono::Local::now().date_naive();
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());

            info!(year, month, "Fetching archive");
            let docs = client.get_archive(year, month).await?;
            info!(year, month, count = docs.len(), "Archive fetch complete");

            for doc in &docs {
                match format_article(doc) {
                    Ok(article) => println!("{}", serde_json::to_string_pretty(&article)?),
                    Err(e) => error!(error = %e, "Skipping record with missing fields"),
                }
            }
        }

        Command::Read { url } => {
            let content = fetch_article_content(&url).await?;
            println!("{}\n", content.title);
            println!("{}", content.text);
        }
    }

    Ok(())
}

fn build_client(
    api_key: &Option<String>,
    api_base: &Option<String>,
) -> Result<NytClient, Box<dyn Error>> {
    let key = api_key
        .clone()
        .ok_or("an API key is required (pass --api-key or set NYT_API_KEY)")?;
    let mut client = NytClient::new(key);
    if let Some(base) = api_base {
        client = client.with_api_base(base);
    }
    Ok(client)
}
