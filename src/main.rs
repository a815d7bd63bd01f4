use anyhow::{Context, Result};
use chrono::Local;
use resale_scout::config::{ScoutConfig, SourceKind};
use resale_scout::scrapers::{
    BrowserOptions, EbayBrowserScraper, EbayHttpScraper, ListingSource, SearchQuery,
};
use resale_scout::{export, pipeline, report};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ScoutConfig::from_env()?;

    let keywords = read_query()?;
    if keywords.is_empty() {
        println!("Search query cannot be empty.");
        return Ok(());
    }

    info!("✅ Scrape started for: {}", keywords);
    let query = SearchQuery::new(&keywords, &config.base_url);

    let source = build_source(&config)?;
    info!("Using source: {}", source.source_name());

    let raw_listings = match source.fetch(&query).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("❌ ERROR: {:#}", e);
            return Err(e);
        }
    };

    let output = pipeline::run(&raw_listings, config.top_display);
    info!("✅ Found {} valid listings", output.all.len());

    println!("\n🎯 SOLD LISTINGS");
    println!("{}", "-".repeat(50));
    print!("{}", report::render_top(&output.top));

    if let Some(stats) = &output.stats {
        info!(
            "Mean of {} priced listings: {}",
            stats.count,
            report::format_amount(stats.mean, &config.currency)
        );
        println!(
            "🧾 Avg resale for {}: {}",
            keywords,
            report::format_price_range(stats, &config.currency)
        );
    }
    if let Some((first, last)) = report::sold_date_span(&output.all) {
        info!("Sold between {} and {}", first, last);
    }

    export::save_csv(&config.output, &output.all)?;
    info!("✅ Scrape completed at {}", Local::now().format("%H:%M:%S"));

    Ok(())
}

/// Keywords from the command line, or an interactive prompt
fn read_query() -> Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" ").trim().to_string());
    }

    print!("🤖 Please tell me what item you're looking for. ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read search query")?;

    Ok(line.trim().to_string())
}

fn build_source(config: &ScoutConfig) -> Result<Box<dyn ListingSource>> {
    let source: Box<dyn ListingSource> = match config.source {
        SourceKind::Browser => Box::new(EbayBrowserScraper::new(BrowserOptions {
            max_scrolls: config.max_scrolls,
            wait_timeout: config.wait_timeout,
            headless: config.headless,
        })?),
        SourceKind::Http => Box::new(EbayHttpScraper::new(config.wait_timeout)?),
    };

    Ok(source)
}
