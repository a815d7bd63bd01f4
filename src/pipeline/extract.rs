use crate::models::{Listing, RawListing, NOT_AVAILABLE};
use crate::pipeline::normalize::{clean_date, clean_price, clean_title};
use crate::pipeline::price::parse_price;
use thiserror::Error;

/// Category/landing cards that show up among real results
const GENERIC_TITLE_PHRASE: &str = "shop on ebay";

/// Why a raw card did not become a listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no title fragment")]
    MissingTitle,
    #[error("title is empty after cleaning")]
    EmptyTitle,
    #[error("title '{0}' is a category page")]
    ShopPage(String),
    #[error("no sterling price found")]
    MissingPrice,
}

/// Build a listing from one card's fragments, or `None` if it is not reportable.
pub fn extract(raw: &RawListing) -> Option<Listing> {
    try_extract(raw).ok()
}

/// Like `extract`, but says why a card was rejected.
pub fn try_extract(raw: &RawListing) -> Result<Listing, Rejection> {
    let raw_title = raw.title.as_deref().ok_or(Rejection::MissingTitle)?;

    let title = match clean_title(raw_title) {
        Some(title) if title != NOT_AVAILABLE => title,
        _ => return Err(Rejection::EmptyTitle),
    };
    if title.to_lowercase().contains(GENERIC_TITLE_PHRASE) {
        return Err(Rejection::ShopPage(title));
    }

    let price = raw.price.as_deref().map(clean_price).unwrap_or_default();
    if price.is_empty() {
        return Err(Rejection::MissingPrice);
    }
    let price_value = parse_price(&price);

    let date = raw.date.as_deref().and_then(clean_date);
    let link = raw.link.as_deref().and_then(canonical_link);

    Ok(Listing {
        title,
        price,
        price_value,
        date,
        link,
    })
}

/// Drop tracking parameters: everything from the first '?' on.
pub fn canonical_link(href: &str) -> Option<String> {
    let base = href.split('?').next().unwrap_or_default().trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
