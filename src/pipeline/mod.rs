//! Turns raw listing cards into de-duplicated listings and price statistics.

pub mod dedup;
pub mod extract;
pub mod normalize;
pub mod price;
pub mod stats;

use crate::models::{Listing, PriceStatistics, RawListing};
use tracing::{debug, info};

/// Result of one pass over a results page
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// First `top_n` listings in discovery order
    pub top: Vec<Listing>,
    /// Every unique listing, used for export and statistics
    pub all: Vec<Listing>,
    pub stats: Option<PriceStatistics>,
}

/// Extract, de-duplicate and summarise a batch of raw cards.
///
/// Never fails: bad cards are dropped and an empty batch gives an empty
/// output with no statistics.
pub fn run(raw_listings: &[RawListing], top_n: usize) -> PipelineOutput {
    let mut rejected = 0usize;

    let candidates: Vec<Listing> = raw_listings
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| match extract::try_extract(raw) {
            Ok(listing) => Some(listing),
            Err(reason) => {
                debug!("Skipped card {}: {}", idx, reason);
                rejected += 1;
                None
            }
        })
        .collect();

    let extracted = candidates.len();
    let all = dedup::dedupe(candidates);
    info!(
        "Kept {} of {} cards ({} rejected, {} duplicate or unlinked)",
        all.len(),
        raw_listings.len(),
        rejected,
        extracted - all.len()
    );

    let stats = stats::aggregate(&all);
    if stats.is_none() {
        debug!("No priced listings, skipping statistics");
    }

    let top = all.iter().take(top_n).cloned().collect();

    PipelineOutput { top, all, stats }
}
