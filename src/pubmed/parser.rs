use crate::error::{PubMedError, Result};
use crate::pubmed::models::{Author, PubMedArticle};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufReader;
use tracing::{debug, instrument};

pub struct PubMedXmlParser;

impl PubMedXmlParser {
    /// Parse article from EFetch XML response
    #[instrument(skip(xml), fields(pmid = %pmid, xml_size = xml.len()))]
    pub fn parse_article_from_xml(xml: &str, pmid: &str) -> Result<PubMedArticle> {
        let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
        reader.config_mut().trim_text(true);

        let mut title: Option<String> = None;
        let mut abstract_text: Option<String> = None;
        let mut authors: Vec<Author> = Vec::new();
        let mut year: Option<String> = None;
        let mut volume: Option<String> = None;
        let mut issue: Option<String> = None;
        let mut journal: Option<String> = None;
        let mut pages: Option<String> = None;
        let mut corresponding_email: Option<String> = None;

        let mut buf = Vec::new();
        let mut saw_article = false;
        let mut in_article_title = false;
        let mut in_abstract = false;
        let mut in_abstract_text = false;
        let mut in_journal_title = false;
        let mut in_pub_date = false;
        let mut in_year = false;
        let mut in_volume = false;
        let mut in_issue = false;
        let mut in_pagination = false;
        let mut in_medline_pgn = false;
        let mut in_author_list = false;
        let mut in_author = false;
        let mut in_last_name = false;
        let mut in_fore_name = false;
        let mut in_initials = false;
        let mut in_affiliation_info = false;
        let mut in_affiliation = false;
        let mut current_author_last = String::new();
        let mut current_author_fore = String::new();
        let mut current_author_initials = String::new();
        let mut current_author_affiliations: Vec<String> = Vec::new();
        let mut current_affiliation_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"PubmedArticle" => saw_article = true,
                    b"ArticleTitle" => in_article_title = true,
                    b"Abstract" => in_abstract = true,
                    b"AbstractText" => in_abstract_text = true,
                    b"Title" if !in_article_title => in_journal_title = true,
                    b"PubDate" => in_pub_date = true,
                    b"Year" if in_pub_date => in_year = true,
                    b"Volume" => in_volume = true,
                    b"Issue" => in_issue = true,
                    b"Pagination" => in_pagination = true,
                    b"MedlinePgn" if in_pagination => in_medline_pgn = true,
                    b"AuthorList" => in_author_list = true,
                    b"Author" if in_author_list => {
                        in_author = true;
                        current_author_last.clear();
                        current_author_fore.clear();
                        current_author_initials.clear();
                        current_author_affiliations.clear();
                    }
                    b"LastName" if in_author => in_last_name = true,
                    b"ForeName" if in_author => in_fore_name = true,
                    b"Initials" if in_author => in_initials = true,
                    b"AffiliationInfo" if in_author => {
                        in_affiliation_info = true;
                        current_affiliation_text.clear();
                    }
                    b"Affiliation" if in_affiliation_info => in_affiliation = true,
                    _ => {}
                },
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"ArticleTitle" => in_article_title = false,
                    b"Abstract" => in_abstract = false,
                    b"AbstractText" => in_abstract_text = false,
                    b"Title" => in_journal_title = false,
                    b"PubDate" => in_pub_date = false,
                    b"Year" => in_year = false,
                    b"Volume" => in_volume = false,
                    b"Issue" => in_issue = false,
                    b"Pagination" => in_pagination = false,
                    b"MedlinePgn" => in_medline_pgn = false,
                    b"AuthorList" => in_author_list = false,
                    b"Author" => {
                        if in_author {
                            let name = format_author_name(
                                &current_author_last,
                                &current_author_fore,
                                &current_author_initials,
                            );
                            if let Some(name) = name {
                                authors.push(Author {
                                    name,
                                    affiliations: current_author_affiliations.clone(),
                                });
                            }
                            in_author = false;
                        }
                    }
                    b"LastName" => in_last_name = false,
                    b"ForeName" => in_fore_name = false,
                    b"Initials" => in_initials = false,
                    b"AffiliationInfo" => {
                        if in_affiliation_info && !current_affiliation_text.is_empty() {
                            if corresponding_email.is_none() {
                                corresponding_email =
                                    extract_email_from_text(&current_affiliation_text);
                            }
                            current_author_affiliations
                                .push(current_affiliation_text.clone());
                        }
                        in_affiliation_info = false;
                    }
                    b"Affiliation" => in_affiliation = false,
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|_| PubMedError::XmlParseError {
                            message: "Failed to decode XML text".to_string(),
                        })?
                        .into_owned();

                    if in_article_title {
                        title = Some(text);
                    } else if in_abstract_text && in_abstract {
                        // Structured abstracts carry several AbstractText sections
                        if let Some(existing) = abstract_text.as_mut() {
                            if !existing.is_empty() {
                                existing.push(' ');
                            }
                            existing.push_str(&text);
                        } else {
                            abstract_text = Some(text);
                        }
                    } else if in_journal_title && !in_article_title {
                        journal = Some(text);
                    } else if in_year && in_pub_date {
                        year = Some(text);
                    } else if in_volume {
                        volume = Some(text);
                    } else if in_issue {
                        issue = Some(text);
                    } else if in_medline_pgn && in_pagination {
                        pages = Some(text);
                    } else if in_last_name && in_author {
                        current_author_last = text;
                    } else if in_fore_name && in_author {
                        current_author_fore = text;
                    } else if in_initials && in_author {
                        current_author_initials = text;
                    } else if in_affiliation && in_affiliation_info {
                        current_affiliation_text = text;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(PubMedError::XmlParseError {
                        message: format!("XML parsing error: {}", e),
                    });
                }
                _ => {}
            }
            buf.clear();
        }

        if !saw_article {
            debug!("No PubmedArticle element found in XML");
            return Err(PubMedError::ArticleNotFound {
                pmid: pmid.to_string(),
            });
        }

        debug!(
            authors_parsed = authors.len(),
            has_abstract = abstract_text.is_some(),
            has_email = corresponding_email.is_some(),
            "Completed XML parsing"
        );

        Ok(PubMedArticle {
            pmid: pmid.to_string(),
            title,
            abstract_text,
            authors,
            year,
            volume,
            issue,
            journal,
            pages,
            corresponding_email,
        })
    }
}

/// Extract the first email address from affiliation text
fn extract_email_from_text(text: &str) -> Option<String> {
    for part in text.split_whitespace() {
        if part.contains('@') && part.contains('.') {
            let cleaned = part.trim_end_matches(&['.', ',', ';', ')'][..]);
            if cleaned.len() > 5 {
                return Some(cleaned.to_string());
            }
        }
    }
    None
}

/// Format an author display name from its components, `None` when the
/// record has no usable name parts
fn format_author_name(last_name: &str, fore_name: &str, initials: &str) -> Option<String> {
    match (fore_name.is_empty(), last_name.is_empty()) {
        (false, false) => Some(format!("{} {}", fore_name, last_name)),
        (true, false) => {
            if initials.is_empty() {
                Some(last_name.to_string())
            } else {
                Some(format!("{} {}", initials, last_name))
            }
        }
        (false, true) => Some(fore_name.to_string()),
        (true, true) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ARTICLE_XML: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2023//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_230101.dtd">
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">12345678</PMID>
        <Article>
            <Journal>
                <JournalIssue>
                    <Volume>12</Volume>
                    <Issue>3</Issue>
                    <PubDate>
                        <Year>2020</Year>
                        <Month>Sep</Month>
                    </PubDate>
                </JournalIssue>
                <Title>Test Journal</Title>
            </Journal>
            <ArticleTitle>Industry collaboration in oncology trials</ArticleTitle>
            <Pagination>
                <MedlinePgn>101-110</MedlinePgn>
            </Pagination>
            <Abstract>
                <AbstractText>This is a test abstract.</AbstractText>
            </Abstract>
            <AuthorList>
                <Author>
                    <LastName>Doe</LastName>
                    <ForeName>John</ForeName>
                    <Initials>J</Initials>
                    <AffiliationInfo>
                        <Affiliation>Acme Inc., Cambridge, MA, USA. john.doe@acme.com</Affiliation>
                    </AffiliationInfo>
                </Author>
                <Author>
                    <LastName>Smith</LastName>
                    <ForeName>Jane</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Department of Medicine, Stanford University, CA, USA</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn test_parse_full_article() {
        let article =
            PubMedXmlParser::parse_article_from_xml(FULL_ARTICLE_XML, "12345678").unwrap();

        assert_eq!(article.pmid, "12345678");
        assert_eq!(
            article.title.as_deref(),
            Some("Industry collaboration in oncology trials")
        );
        assert_eq!(article.abstract_text.as_deref(), Some("This is a test abstract."));
        assert_eq!(article.journal.as_deref(), Some("Test Journal"));
        assert_eq!(article.year.as_deref(), Some("2020"));
        assert_eq!(article.volume.as_deref(), Some("12"));
        assert_eq!(article.issue.as_deref(), Some("3"));
        assert_eq!(article.pages.as_deref(), Some("101-110"));

        assert_eq!(article.authors.len(), 2);
        assert_eq!(article.authors[0].name, "John Doe");
        assert_eq!(
            article.authors[0].affiliations,
            vec!["Acme Inc., Cambridge, MA, USA. john.doe@acme.com".to_string()]
        );
        assert_eq!(article.authors[1].name, "Jane Smith");
        assert!(article.authors[1].affiliations[0].contains("Stanford University"));

        assert_eq!(
            article.corresponding_email.as_deref(),
            Some("john.doe@acme.com")
        );
    }

    #[test]
    fn test_parse_structured_abstract() {
        let xml = r#"
        <PubmedArticleSet>
            <PubmedArticle>
                <MedlineCitation>
                    <PMID>32887691</PMID>
                    <Article>
                        <ArticleTitle>A living WHO guideline on drugs for covid-19.</ArticleTitle>
                        <Abstract>
                            <AbstractText Label="UPDATES">This is the fourteenth version.</AbstractText>
                            <AbstractText Label="CLINICAL QUESTION">What is the role of drugs?</AbstractText>
                        </Abstract>
                    </Article>
                </MedlineCitation>
            </PubmedArticle>
        </PubmedArticleSet>"#;

        let article = PubMedXmlParser::parse_article_from_xml(xml, "32887691").unwrap();

        assert_eq!(
            article.abstract_text.as_deref(),
            Some("This is the fourteenth version. What is the role of drugs?")
        );
    }

    #[test]
    fn test_parse_article_with_missing_fields() {
        let xml = r#"
        <PubmedArticleSet>
            <PubmedArticle>
                <MedlineCitation>
                    <PMID>87654321</PMID>
                    <Article>
                        <ArticleTitle>Sparse record</ArticleTitle>
                        <AuthorList>
                            <Author>
                                <LastName>Smith</LastName>
                                <ForeName>Jane</ForeName>
                            </Author>
                        </AuthorList>
                    </Article>
                </MedlineCitation>
            </PubmedArticle>
        </PubmedArticleSet>"#;

        let article = PubMedXmlParser::parse_article_from_xml(xml, "87654321").unwrap();

        assert_eq!(article.title.as_deref(), Some("Sparse record"));
        assert!(article.abstract_text.is_none());
        assert!(article.year.is_none());
        assert!(article.volume.is_none());
        assert!(article.issue.is_none());
        assert!(article.journal.is_none());
        assert!(article.pages.is_none());
        assert!(article.corresponding_email.is_none());
        assert_eq!(article.authors.len(), 1);
        assert_eq!(article.authors[0].name, "Jane Smith");
        assert!(article.affiliation_list().is_none());
    }

    #[test]
    fn test_empty_result_set_is_not_found() {
        let xml = r#"<?xml version="1.0" ?>
        <PubmedArticleSet>
        </PubmedArticleSet>"#;

        let result = PubMedXmlParser::parse_article_from_xml(xml, "99999999");
        assert!(matches!(
            result,
            Err(PubMedError::ArticleNotFound { pmid }) if pmid == "99999999"
        ));
    }

    #[test]
    fn test_initials_used_when_fore_name_missing() {
        let xml = r#"
        <PubmedArticleSet>
            <PubmedArticle>
                <MedlineCitation>
                    <Article>
                        <ArticleTitle>Initials only</ArticleTitle>
                        <AuthorList>
                            <Author>
                                <LastName>Doe</LastName>
                                <Initials>JA</Initials>
                            </Author>
                        </AuthorList>
                    </Article>
                </MedlineCitation>
            </PubmedArticle>
        </PubmedArticleSet>"#;

        let article = PubMedXmlParser::parse_article_from_xml(xml, "1").unwrap();
        assert_eq!(article.authors[0].name, "JA Doe");
    }

    #[test]
    fn test_extract_email_from_text() {
        assert_eq!(
            extract_email_from_text("Contact john.doe@example.com for details"),
            Some("john.doe@example.com".to_string())
        );
        assert_eq!(
            extract_email_from_text("Email: jane.smith@university.edu."),
            Some("jane.smith@university.edu".to_string())
        );
        assert_eq!(extract_email_from_text("No email here"), None);
    }

    #[test]
    fn test_format_author_name() {
        assert_eq!(
            format_author_name("Smith", "John", ""),
            Some("John Smith".to_string())
        );
        assert_eq!(format_author_name("Doe", "", "J"), Some("J Doe".to_string()));
        assert_eq!(
            format_author_name("Johnson", "", ""),
            Some("Johnson".to_string())
        );
        assert_eq!(format_author_name("", "", ""), None);
    }
}
