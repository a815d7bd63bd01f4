use crate::models::RawListing;
use crate::scrapers::cards::{parse_cards, CARD_SELECTOR};
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::SearchQuery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use rand::Rng;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pixels scrolled per step while triggering lazy loading
const SCROLL_STEP_PX: u32 = 800;

/// How the browser should walk the results page
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    pub max_scrolls: u32,
    pub wait_timeout: Duration,
    pub headless: bool,
}

/// Browser-based scraper for sold listings using headless Chrome
pub struct EbayBrowserScraper {
    browser: Browser,
    options: BrowserOptions,
}

impl EbayBrowserScraper {
    /// Launch Chrome and wrap it in a scraper
    pub fn new(options: BrowserOptions) -> Result<Self> {
        info!("🌐 Launching headless Chrome...");

        let launch = LaunchOptions::default_builder()
            .headless(options.headless)
            .window_size(Some((1920, 1080)))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(launch).context("Failed to launch Chrome browser")?;

        Ok(Self { browser, options })
    }

    /// Load the results page, let it lazy-load, and read every card
    pub fn scrape_sold(&self, query: &SearchQuery) -> Result<Vec<RawListing>> {
        let url = query.sold_listings_url()?;

        info!("🔎 Navigating to {}", url);
        let tab = self.browser.new_tab()?;
        tab.navigate_to(url.as_str())?;
        tab.wait_until_navigated()?;

        // Consent banners render late
        thread::sleep(Duration::from_secs(5));
        dismiss_consent(&tab);

        self.scroll(&tab)?;

        info!("⏳ Extracting items");
        if let Err(e) = tab.wait_for_element_with_custom_timeout(CARD_SELECTOR, self.options.wait_timeout) {
            warn!("No listing cards appeared within {:?}: {}", self.options.wait_timeout, e);
        }

        let html_result = tab.evaluate("document.documentElement.outerHTML", false)?;
        let html = match html_result.value {
            Some(value) => value.as_str().unwrap_or("").to_string(),
            None => {
                warn!("Could not get HTML from page");
                String::new()
            }
        };

        if html.is_empty() {
            warn!("HTML is empty");
            return Ok(Vec::new());
        }
        debug!("Captured {} bytes of HTML", html.len());

        parse_cards(&html)
    }

    fn scroll(&self, tab: &Tab) -> Result<()> {
        info!("⏫ Scrolling page {} times to load items", self.options.max_scrolls);

        let mut rng = rand::thread_rng();
        for step in 1..=self.options.max_scrolls {
            tab.evaluate(&format!("window.scrollTo(0, {});", step * SCROLL_STEP_PX), false)?;
            thread::sleep(Duration::from_millis(rng.gen_range(1000..=2000)));
        }

        Ok(())
    }
}

/// Click the cookie banner if there is one; absence is fine
fn dismiss_consent(tab: &Tab) {
    let clicked = tab.evaluate(
        r#"
        (() => {
            const button = Array.from(document.querySelectorAll('button'))
                .find(b => b.textContent.includes('Accept all') || b.textContent.includes('Consent'));
            if (button) { button.click(); return true; }
            return false;
        })()
        "#,
        false,
    );

    match clicked {
        Ok(result) if result.value.as_ref().and_then(|v| v.as_bool()) == Some(true) => {
            info!("🍪 Cookie banner dismissed");
            thread::sleep(Duration::from_secs(1));
        }
        Ok(_) => debug!("No cookie banner found"),
        Err(e) => debug!("Cookie banner check failed: {}", e),
    }
}

#[async_trait]
impl ListingSource for EbayBrowserScraper {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawListing>> {
        // headless_chrome is synchronous
        tokio::task::block_in_place(|| self.scrape_sold(query))
    }

    fn source_name(&self) -> &'static str {
        "eBay (browser)"
    }
}
