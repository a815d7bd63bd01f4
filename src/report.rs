//! Console presentation of a scrape.

use crate::models::{Listing, PriceStatistics};
use std::fmt::Write;

/// "£1,234.50": two decimals, comma thousands separators
pub fn format_amount(value: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// The ±5% band as "£190.00 - £210.00"
pub fn format_price_range(stats: &PriceStatistics, symbol: &str) -> String {
    format!(
        "{} - {}",
        format_amount(stats.lower_bound, symbol),
        format_amount(stats.upper_bound, symbol)
    )
}

/// Numbered block per listing, as printed to stdout
pub fn render_top(listings: &[Listing]) -> String {
    let mut out = String::new();

    for (i, listing) in listings.iter().enumerate() {
        let _ = writeln!(out, "{}. 🏷️ {}", i + 1, listing.title);
        let _ = writeln!(
            out,
            "   💰 {} | 📅 Sold: {}",
            listing.price,
            listing.date_or_sentinel()
        );
        let _ = writeln!(out, "   🔗 {}", listing.link_or_sentinel());
        out.push('\n');
    }

    out
}

/// Earliest and latest sold dates among the listings, if any parse
pub fn sold_date_span(listings: &[Listing]) -> Option<(chrono::NaiveDate, chrono::NaiveDate)> {
    let mut dates = listings.iter().filter_map(Listing::sold_on);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing(title: &str, date: Option<&str>) -> Listing {
        Listing {
            title: title.to_string(),
            price: "£99.00".to_string(),
            price_value: 99.0,
            date: date.map(str::to_string),
            link: Some("https://x.test/itm/9".to_string()),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "£"), "£0.00");
        assert_eq!(format_amount(190.0, "£"), "£190.00");
        assert_eq!(format_amount(1234.5, "£"), "£1,234.50");
        assert_eq!(format_amount(1_234_567.891, "£"), "£1,234,567.89");
        assert_eq!(format_amount(100_000.0, "$"), "$100,000.00");
    }

    #[test]
    fn test_format_price_range() {
        let stats = PriceStatistics {
            mean: 200.0,
            lower_bound: 190.0,
            upper_bound: 210.0,
            count: 3,
        };
        assert_eq!(format_price_range(&stats, "£"), "£190.00 - £210.00");
    }

    #[test]
    fn test_render_top() {
        let out = render_top(&[listing("Kindle Paperwhite", Some("12 Mar 2024")), listing("Kindle Oasis", None)]);

        assert!(out.starts_with("1. 🏷️ Kindle Paperwhite\n"));
        assert!(out.contains("   💰 £99.00 | 📅 Sold: 12 Mar 2024\n"));
        assert!(out.contains("2. 🏷️ Kindle Oasis\n"));
        assert!(out.contains("📅 Sold: N/A"));
        assert!(out.contains("   🔗 https://x.test/itm/9\n"));
    }

    #[test]
    fn test_sold_date_span() {
        let listings = vec![
            listing("a", Some("12 Mar 2024")),
            listing("b", None),
            listing("c", Some("2 Jan 2024")),
            listing("d", Some("30 Apr 2024")),
        ];

        assert_eq!(
            sold_date_span(&listings),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
            ))
        );
        assert_eq!(sold_date_span(&[listing("x", None)]), None);
    }
}
