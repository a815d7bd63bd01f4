use crate::models::RawListing;
use crate::scrapers::cards::parse_cards;
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::SearchQuery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Plain HTTP scraper; only sees cards present in the initial HTML
pub struct EbayHttpScraper {
    client: Client,
}

impl EbayHttpScraper {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ListingSource for EbayHttpScraper {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawListing>> {
        let url = query.sold_listings_url()?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch results page")?;

        if !response.status().is_success() {
            warn!("Results page returned status: {}", response.status());
            anyhow::bail!("Failed to fetch results page: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of HTML", html.len());

        let cards = parse_cards(&html)?;
        if cards.is_empty() {
            info!("No cards in static HTML; the browser source may find more");
        }

        Ok(cards)
    }

    fn source_name(&self) -> &'static str {
        "eBay (http)"
    }
}
