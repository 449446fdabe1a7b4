//! The four-stage pipeline: submit query, fetch records, classify
//! affiliations, derive report rows.
//!
//! Fetches run sequentially and any failure propagates immediately; there
//! is no retry and no partial output.

use crate::error::Result;
use crate::pubmed::models::PubMedArticle;
use crate::report::{ReportRow, rows_from_articles};
use crate::source::ArticleSource;
use tracing::{debug, info};

/// Fetch every article matched by `query`, up to `limit`
pub async fn fetch_articles(
    source: &dyn ArticleSource,
    query: &str,
    limit: usize,
) -> Result<Vec<PubMedArticle>> {
    info!(query = %query, limit, "Fetching papers for query");

    let pmids = source.search(query, limit).await?;
    debug!(?pmids, "Found PMIDs");

    let mut articles = Vec::with_capacity(pmids.len());
    for pmid in &pmids {
        let article = source.fetch(pmid).await?;
        articles.push(article);
    }

    Ok(articles)
}

/// Run the full pipeline, returning one report row per matched PMID
pub async fn collect_report(
    source: &dyn ArticleSource,
    query: &str,
    limit: usize,
) -> Result<Vec<ReportRow>> {
    let articles = fetch_articles(source, query, limit).await?;
    Ok(rows_from_articles(&articles))
}
