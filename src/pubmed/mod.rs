//! PubMed E-utilities integration: HTTP client, EFetch XML parsing, and
//! article models.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

pub use client::PubMedClient;
pub use models::{Author, PubMedArticle};
