use crate::models::RawListing;
use crate::scrapers::types::SearchQuery;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can produce raw listing cards for a search
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every card on the sold-listings results page, in page order
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawListing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
