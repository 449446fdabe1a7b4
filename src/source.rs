use crate::error::Result;
use crate::pubmed::models::PubMedArticle;
use async_trait::async_trait;

/// Minimal capability surface over the literature service.
///
/// The pipeline only needs to submit a query and fetch records by
/// identifier, so tests can substitute a fixture-backed implementation
/// instead of calling the live API.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Submit a search query, returning at most `limit` PMIDs in service
    /// order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// Fetch one article record by PMID
    async fn fetch(&self, pmid: &str) -> Result<PubMedArticle>;
}
