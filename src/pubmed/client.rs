use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PubMedArticle;
use crate::pubmed::parser::PubMedXmlParser;
use crate::pubmed::responses::ESearchResult;
use crate::source::ArticleSource;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Client for the NCBI E-utilities PubMed API
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papertrawl::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papertrawl::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search for articles, returning PMIDs in the order the service
    /// returned them
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - On a non-success status or an ERROR
    ///   field in the response body
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papertrawl::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("cancer treatment", 5).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let mut url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        self.append_api_params(&mut url);

        debug!("Making ESearch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Search API request failed with status: {}",
                response.status()
            );
            return Err(Self::status_error(response.status()));
        }

        let search_result: ESearchResult = response.json().await?;

        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let pmids = search_result.esearchresult.idlist;
        info!(results_found = pmids.len(), "Search completed successfully");

        Ok(pmids)
    }

    /// Fetch article metadata by PMID, including abstract and author
    /// affiliations
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidPmid` - If the PMID is not all digits
    /// * `PubMedError::ArticleNotFound` - If the article is not found
    /// * `PubMedError::RequestError` - If the HTTP request fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papertrawl::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let article = client.fetch_article("31978945").await?;
    ///     if let Some(title) = &article.title {
    ///         println!("Title: {}", title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_article(&self, pmid: &str) -> Result<PubMedArticle> {
        if pmid.trim().is_empty() || !pmid.chars().all(|c| c.is_ascii_digit()) {
            warn!("Invalid PMID format provided");
            return Err(PubMedError::InvalidPmid {
                pmid: pmid.to_string(),
            });
        }

        let mut url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&rettype=abstract",
            self.base_url, pmid
        );
        self.append_api_params(&mut url);

        debug!("Making EFetch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(Self::status_error(response.status()));
        }

        debug!("Received successful API response, parsing XML");
        let xml_text = response.text().await?;

        let result = PubMedXmlParser::parse_article_from_xml(&xml_text, pmid);
        match &result {
            Ok(article) => {
                info!(
                    authors_count = article.authors.len(),
                    has_abstract = article.abstract_text.is_some(),
                    "Successfully parsed article"
                );
            }
            Err(e) => {
                warn!("Failed to parse article XML: {}", e);
            }
        }

        result
    }

    fn append_api_params(&self, url: &mut String) {
        for (key, value) in self.config.build_api_params() {
            url.push('&');
            url.push_str(&key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
    }

    fn status_error(status: reqwest::StatusCode) -> PubMedError {
        PubMedError::ApiError {
            message: format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            ),
        }
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for PubMedClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        self.search_articles(query, limit).await
    }

    async fn fetch(&self, pmid: &str) -> Result<PubMedArticle> {
        self.fetch_article(pmid).await
    }
}
