use anyhow::{Context, Result};
use reqwest::Url;

/// What to search for and where
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text keywords as typed by the user
    pub keywords: String,
    /// Marketplace origin, e.g. "https://www.ebay.co.uk"
    pub base_url: String,
}

impl SearchQuery {
    pub fn new(keywords: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            base_url: base_url.into(),
        }
    }

    /// Results page restricted to sold, completed listings
    pub fn sold_listings_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .and_then(|base| base.join("/sch/i.html"))
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;

        url.query_pairs_mut()
            .append_pair("_nkw", self.keywords.trim())
            .append_pair("LH_Sold", "1")
            .append_pair("LH_Complete", "1")
            .append_pair("_dmd", "1");

        Ok(url)
    }
}
