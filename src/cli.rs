//! Command-line interface definitions for the NYT Wire binary.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key and base URL can be provided via flags or environment
//! variables; the key never lives in source.

use clap::{Parser, Subcommand};
use nyt_wire::SortOrder;

/// Command-line arguments for the NYT Wire binary.
///
/// # Examples
///
/// ```sh
/// # Keyword search with a date range
/// nyt_wire search "United States Politics and Government" \
///     --begin-date 20241101 --end-date 20241111 --limit 2 --fetch-content
///
/// # Everything published in November 2024
/// nyt_wire archive --year 2024 --month 11
///
/// # Readable text for one article page
/// nyt_wire read https://www.nytimes.com/2024/11/11/us/politics/results.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// New York Times API key (required for `search` and `archive`)
    #[arg(long, env = "NYT_API_KEY")]
    pub api_key: Option<String>,

    /// Override the API base URL (e.g. a stub server while testing)
    #[arg(long, env = "NYT_API_BASE")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search articles by keyword with optional date range
    Search {
        /// Search query
        query: String,

        /// Earliest publication date, YYYYMMDD
        #[arg(long)]
        begin_date: Option<String>,

        /// Latest publication date, YYYYMMDD
        #[arg(long)]
        end_date: Option<String>,

        /// Zero-based result page
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Result ordering
        #[arg(long, value_enum, default_value_t = SortOrder::Newest)]
        sort: SortOrder,

        /// Maximum number of results to display
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// Also download each result's page and print its readable text
        #[arg(long)]
        fetch_content: bool,
    },

    /// Fetch all articles for a year/month from the archive
    Archive {
        /// Archive year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Archive month, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Download one article page and print its readable text
    Read {
        /// Article page URL
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_search_parsing() {
        let cli = Cli::parse_from([
            "nyt_wire",
            "--api-key",
            "k",
            "search",
            "election",
            "--begin-date",
            "20241101",
            "--end-date",
            "20241111",
            "--limit",
            "2",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Command::Search {
                query,
                begin_date,
                end_date,
                page,
                sort,
                limit,
                fetch_content,
            } => {
                assert_eq!(query, "election");
                assert_eq!(begin_date.as_deref(), Some("20241101"));
                assert_eq!(end_date.as_deref(), Some("20241111"));
                assert_eq!(page, 0);
                assert_eq!(sort, SortOrder::Newest);
                assert_eq!(limit, 2);
                assert!(!fetch_content);
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_archive_defaults() {
        let cli = Cli::parse_from(["nyt_wire", "--api-key", "k", "archive"]);
        match cli.command {
            Command::Archive { year, month } => {
                assert!(year.is_none());
                assert!(month.is_none());
            }
            other => panic!("expected Archive, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_read_needs_no_api_key() {
        let cli = Cli::parse_from(["nyt_wire", "read", "https://example.com/a"]);
        assert!(matches!(cli.command, Command::Read { .. }));
    }

    #[test]
    fn test_cli_sort_values() {
        let cli = Cli::parse_from([
            "nyt_wire", "--api-key", "k", "search", "q", "--sort", "relevance",
        ]);
        match cli.command {
            Command::Search { sort, .. } => assert_eq!(sort, SortOrder::Relevance),
            other => panic!("expected Search, got {other:?}"),
        }
    }
}
