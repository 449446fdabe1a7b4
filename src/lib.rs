//! # papertrawl
//!
//! Queries PubMed for articles matching a search term, extracts
//! bibliographic metadata and author affiliations, flags authors with
//! industry (non-academic) affiliations using keyword heuristics, and
//! writes a merged CSV report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use papertrawl::{ClientConfig, PubMedClient, pipeline, report};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@example.com");
//!     let client = PubMedClient::with_config(config);
//!
//!     let rows = pipeline::collect_report(&client, "cancer treatment", 5).await?;
//!     report::write_csv(Path::new("results.csv"), &rows)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The network boundary is the [`ArticleSource`] trait, so tests can run
//! the pipeline against fixture data instead of the live API.

pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pubmed;
pub mod report;
pub mod source;

pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{Author, PubMedArticle, PubMedClient};
pub use report::ReportRow;
pub use source::ArticleSource;

/// Placeholder substituted for any absent field in the output
pub const NOT_AVAILABLE: &str = "N/A";
