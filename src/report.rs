//! Report assembly and CSV export.
//!
//! Each fetched article becomes exactly one [`ReportRow`]; any field the
//! source record lacked is rendered as the "N/A" sentinel, never as an
//! empty cell.

use crate::NOT_AVAILABLE;
use crate::classify::extract_non_academic_authors;
use crate::error::Result;
use crate::pubmed::models::PubMedArticle;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Output column order, fixed
pub const CSV_HEADERS: [&str; 13] = [
    "pmid",
    "Title",
    "Abstract",
    "Author",
    "Year",
    "Volume",
    "Issue",
    "Journal",
    "Citation",
    "Link",
    "Non-academic Authors",
    "Company Affiliations",
    "Corresponding Author Email",
];

/// One output row per article, all cells already sentinel-substituted
///
/// Field order matches [`CSV_HEADERS`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub pmid: String,
    pub title: String,
    pub abstract_text: String,
    pub authors: String,
    pub year: String,
    pub volume: String,
    pub issue: String,
    pub journal: String,
    pub citation: String,
    pub link: String,
    pub non_academic_authors: String,
    pub company_affiliations: String,
    pub corresponding_email: String,
}

impl ReportRow {
    /// Derive the row for one article, running the affiliation classifier
    ///
    /// When the record carries no affiliation data at all the classifier
    /// is skipped and both derived columns get the sentinel directly.
    pub fn from_article(article: &PubMedArticle) -> Self {
        let author_names = article.author_names();

        let (non_academic_authors, company_affiliations) = match article.affiliation_list() {
            Some(affiliations) if !author_names.is_empty() => {
                extract_non_academic_authors(&author_names, &affiliations)
            }
            _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        let authors = if author_names.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            author_names.join(", ")
        };

        Self {
            pmid: article.pmid.clone(),
            title: or_sentinel(article.title.clone()),
            abstract_text: or_sentinel(article.abstract_text.clone()),
            authors,
            year: or_sentinel(article.year.clone()),
            volume: or_sentinel(article.volume.clone()),
            issue: or_sentinel(article.issue.clone()),
            journal: or_sentinel(article.journal.clone()),
            citation: or_sentinel(article.citation()),
            link: article.url(),
            non_academic_authors,
            company_affiliations,
            corresponding_email: or_sentinel(article.corresponding_email.clone()),
        }
    }
}

fn or_sentinel(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Derive one report row per article, preserving article order
pub fn rows_from_articles(articles: &[PubMedArticle]) -> Vec<ReportRow> {
    articles.iter().map(ReportRow::from_article).collect()
}

/// Write the report as CSV to any writer
///
/// The header row is written even when there are no data rows.
pub fn write_csv_to<W: Write>(writer: W, rows: &[ReportRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write (or overwrite) the report file at `path`
pub fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(file, rows)?;

    debug!(path = %path.display(), rows = rows.len(), "Report written");
    Ok(())
}
