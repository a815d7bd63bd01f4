pub mod browser;
pub mod cards;
pub mod http;
pub mod traits;
pub mod types;

pub use browser::{BrowserOptions, EbayBrowserScraper};
pub use http::EbayHttpScraper;
pub use traits::ListingSource;
pub use types::SearchQuery;
