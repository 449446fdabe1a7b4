use serde::{Deserialize, Serialize};

/// One author of an article, with the affiliations listed for them in the
/// EFetch record, in document order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Author {
    /// Display name ("Fore Last" when both parts are present)
    pub name: String,
    /// Affiliation strings attached to this author
    pub affiliations: Vec<String>,
}

/// Represents a PubMed article with metadata
///
/// Every bibliographic field that can be absent from the source record is
/// an `Option`; the report layer substitutes the "N/A" sentinel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PubMedArticle {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: Option<String>,
    /// Abstract text (structured abstracts concatenated)
    pub abstract_text: Option<String>,
    /// Ordered list of authors with their affiliations
    pub authors: Vec<Author>,
    /// Publication year
    pub year: Option<String>,
    /// Journal volume
    pub volume: Option<String>,
    /// Journal issue
    pub issue: Option<String>,
    /// Journal name
    pub journal: Option<String>,
    /// Page range (MedlinePgn)
    pub pages: Option<String>,
    /// Corresponding author email, first one found in any affiliation
    pub corresponding_email: Option<String>,
}

impl PubMedArticle {
    /// Author display names, in article order
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().map(|a| a.name.clone()).collect()
    }

    /// One affiliation string per author, positionally paired with
    /// [`author_names`](Self::author_names)
    ///
    /// Authors without affiliation data contribute an empty string so the
    /// pairing stays positional. Returns `None` when the record carries no
    /// affiliation data at all, in which case classification is skipped.
    pub fn affiliation_list(&self) -> Option<Vec<String>> {
        if self.authors.iter().all(|a| a.affiliations.is_empty()) {
            return None;
        }
        Some(
            self.authors
                .iter()
                .map(|a| a.affiliations.join("; "))
                .collect(),
        )
    }

    /// Canonical article URL on pubmed.ncbi.nlm.nih.gov
    pub fn url(&self) -> String {
        format!("https://pubmed.ncbi.nlm.nih.gov/{}/", self.pmid)
    }

    /// Formatted citation built from the available bibliographic parts
    ///
    /// Shape: `First Author, et al. Title. Journal. Year;Volume(Issue):Pages.`
    /// with absent parts omitted. `None` when there is no title to cite.
    pub fn citation(&self) -> Option<String> {
        let title = self.title.as_deref()?;

        let mut citation = String::new();
        if let Some(first) = self.authors.first() {
            citation.push_str(&first.name);
            if self.authors.len() > 1 {
                citation.push_str(", et al");
            }
            citation.push_str(". ");
        }

        citation.push_str(title);
        if !title.ends_with('.') {
            citation.push('.');
        }

        if let Some(journal) = &self.journal {
            citation.push(' ');
            citation.push_str(journal);
            citation.push('.');
        }

        if let Some(year) = &self.year {
            citation.push(' ');
            citation.push_str(year);
            if let Some(volume) = &self.volume {
                citation.push(';');
                citation.push_str(volume);
                if let Some(issue) = &self.issue {
                    citation.push('(');
                    citation.push_str(issue);
                    citation.push(')');
                }
            }
            if let Some(pages) = &self.pages {
                citation.push(':');
                citation.push_str(pages);
            }
            citation.push('.');
        }

        Some(citation)
    }
}
