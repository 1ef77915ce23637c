//! Command-line interface for hymnal-dedup.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Classify a candidate hymnal file against the catalog
//! - **similar**: Rank catalog hymnals by name similarity
//! - **compare**: Compare the hymns of two candidate files
//! - **suggest**: Typo-tolerant suggestions through the keyword search service
//! - **catalog**: List, show, or export hymnals from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Check an upload before creating it
//! hymnal-dedup check upload.yaml --catalog catalog.json
//!
//! # JSON output for scripting
//! hymnal-dedup --format json check upload.yaml --catalog catalog.json
//!
//! # Names close to "Cruzeiro"
//! hymnal-dedup similar "Cruzeiro" --threshold 0.5 --limit 10
//!
//! # Suggestions from Typesense
//! TYPESENSE_API_KEY=xyz hymnal-dedup suggest "cruzero"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::catalog::store::HymnalCatalog;
use crate::search::client::SearchConfig;

pub mod catalog;
pub mod check;
pub mod compare;
pub mod similar;
pub mod suggest;

#[derive(Parser)]
#[command(name = "hymnal-dedup")]
#[command(version)]
#[command(about = "Detect duplicate hymnals by name and content similarity")]
#[command(
    long_about = "hymnal-dedup checks whether a proposed hymnal already exists in a catalog.\n\nIt compares the hymnal name and a sample of its hymns against every catalog entry and reports:\n- Exact name matches\n- High, medium and low confidence duplicates with their name and content scores\n- Whether the upload needs a create-new / add-version decision"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a candidate hymnal (JSON or YAML) for duplicates
    Check(check::CheckArgs),

    /// Find catalog hymnals with similar names
    Similar(similar::SimilarArgs),

    /// Compare the hymns of two candidate files
    Compare(compare::CompareArgs),

    /// Suggest hymnals through the keyword search service
    Suggest(suggest::SuggestArgs),

    /// Inspect the hymnal catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Location of the catalog file
#[derive(Args, Debug, Clone)]
pub struct CatalogPath {
    /// Path to the hymnal catalog JSON file
    #[arg(long = "catalog", env = "HYMNAL_CATALOG")]
    pub path: PathBuf,
}

impl CatalogPath {
    /// Load the catalog, logging its size when verbose
    pub fn load(&self, verbose: bool) -> anyhow::Result<HymnalCatalog> {
        let catalog = HymnalCatalog::load_from_file(&self.path)?;
        if verbose {
            eprintln!(
                "Loaded catalog with {} hymnals from {}",
                catalog.len(),
                self.path.display()
            );
        }
        Ok(catalog)
    }
}

/// Connection flags for the Typesense search service
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search service host
    #[arg(long, env = "TYPESENSE_HOST", default_value = "localhost")]
    pub search_host: String,

    /// Search service port
    #[arg(long, env = "TYPESENSE_PORT", default_value = "8108")]
    pub search_port: u16,

    /// Search service protocol (http or https)
    #[arg(long, env = "TYPESENSE_PROTOCOL", default_value = "http")]
    pub search_protocol: String,

    /// Search service API key
    #[arg(long, env = "TYPESENSE_API_KEY", hide_env_values = true, default_value = "")]
    pub search_api_key: String,

    /// Connection timeout in milliseconds
    #[arg(long, default_value = "2000")]
    pub search_timeout_ms: u64,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            host: self.search_host.clone(),
            port: self.search_port,
            protocol: self.search_protocol.clone(),
            api_key: self.search_api_key.clone(),
            connection_timeout: Duration::from_millis(self.search_timeout_ms),
            ..SearchConfig::default()
        }
    }
}

/// Parse a similarity threshold, which must lie in `[0.0, 1.0]`
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0.0 and 1.0, got {value}"))
    }
}

/// Shorten `s` to at most `max_len` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert!((parse_threshold("0.7").unwrap() - 0.7).abs() < 1e-9);
        assert!((parse_threshold("1").unwrap() - 1.0).abs() < 1e-9);
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("abc").is_err());
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Cruzeiro", 10), "Cruzeiro");
        assert_eq!(truncate("Hinário São José", 10), "Hinário...");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args_to_config() {
        let args = SearchArgs {
            search_host: "search.local".to_string(),
            search_port: 443,
            search_protocol: "https".to_string(),
            search_api_key: "key".to_string(),
            search_timeout_ms: 1500,
        };
        let config = args.to_config();

        assert_eq!(config.host, "search.local");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.connection_timeout, Duration::from_millis(1500));
        assert_eq!(config.collection, "hymns");
    }
}
