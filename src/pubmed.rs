//! PubMed-backed [`CorpusSource`].
//!
//! Builds the reference corpus in two steps:
//!
//! 1. Fetch one search results page (`{base_url}/?term={term}&size={page_size}`)
//!    and read the article identifiers from the first
//!    `div.search-results-chunk` element's `data-chunk-ids` attribute.
//! 2. Fetch each article page (`{base_url}/{id}/`) in order and take the text
//!    of its `div.abstract-content.selected` element.
//!
//! At most `max_abstracts` abstracts are collected. Articles that fail to
//! load or carry no abstract are skipped with a warning; the build only
//! fails when the search yields no identifiers or no abstract at all.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use healthstats_core::corpus::{CorpusSource, FetchFailure};
use reqwest::{Client, Url};
use scraper::{Html, Selector};

use crate::config::CorpusConfig;

const SEARCH_CHUNK_SELECTOR: &str = "div.search-results-chunk[data-chunk-ids]";
const ABSTRACT_SELECTOR: &str = "div.abstract-content.selected";

/// Separator placed between abstracts in the concatenated corpus.
const ABSTRACT_SEPARATOR: &str = "\n\n";

pub struct PubMedSource {
    client: Client,
    base_url: String,
    term: String,
    page_size: usize,
    max_abstracts: usize,
}

impl PubMedSource {
    pub fn new(config: &CorpusConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            term: config.term.clone(),
            page_size: config.page_size,
            max_abstracts: config.max_abstracts,
        })
    }

    fn search_url(&self) -> Result<Url, FetchFailure> {
        Url::parse_with_params(
            &format!("{}/", self.base_url),
            &[
                ("term", self.term.clone()),
                ("size", self.page_size.to_string()),
            ],
        )
        .map_err(|e| FetchFailure::Transport(format!("invalid search URL: {}", e)))
    }

    fn article_url(&self, id: &str) -> String {
        format!("{}/{}/", self.base_url, id)
    }

    async fn get_text(&self, url: impl reqwest::IntoUrl) -> reqwest::Result<String> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl CorpusSource for PubMedSource {
    fn name(&self) -> &str {
        "pubmed"
    }

    async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure> {
        let search_url = self.search_url()?;
        tracing::info!(url = %search_url, "fetching reference search page");

        let search_html = self
            .get_text(search_url)
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let ids = extract_chunk_ids(&search_html);
        if ids.is_empty() {
            return Err(FetchFailure::NoIdentifiers);
        }
        tracing::info!(count = ids.len(), "found article identifiers");

        let mut abstracts = Vec::new();
        let mut attempted = 0;
        for id in &ids {
            if abstracts.len() >= self.max_abstracts {
                break;
            }
            attempted += 1;

            match self.get_text(self.article_url(id)).await {
                Ok(html) => match extract_abstract(&html) {
                    Some(text) => abstracts.push(text),
                    None => tracing::warn!(id = %id, "article has no abstract, skipping"),
                },
                Err(e) => tracing::warn!(id = %id, error = %e, "failed to fetch article, skipping"),
            }
        }

        if abstracts.is_empty() {
            return Err(FetchFailure::NoContent { attempted });
        }

        tracing::info!(
            abstracts = abstracts.len(),
            attempted,
            "reference corpus assembled"
        );
        Ok(abstracts.join(ABSTRACT_SEPARATOR))
    }
}

fn selector(css: &'static str) -> Selector {
    // Only called with the constant selectors above.
    Selector::parse(css).expect("constant CSS selector must parse")
}

/// Article identifiers listed on a search results page, in page order.
///
/// Only the first results chunk is read.
pub fn extract_chunk_ids(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let chunk_selector = selector(SEARCH_CHUNK_SELECTOR);

    document
        .select(&chunk_selector)
        .next()
        .and_then(|chunk| chunk.value().attr("data-chunk-ids"))
        .map(|ids| {
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Whitespace-normalized text of an article page's abstract, or `None` when
/// the page has no abstract or it is blank.
pub fn extract_abstract(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let abstract_selector = selector(ABSTRACT_SELECTOR);

    let element = document.select(&abstract_selector).next()?;
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
