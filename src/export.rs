use crate::models::Listing;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One CSV row; column order is the field order
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    title: &'a str,
    price: &'a str,
    date: &'a str,
    link: &'a str,
}

impl<'a> From<&'a Listing> for ExportRow<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            title: &listing.title,
            price: &listing.price,
            date: listing.date_or_sentinel(),
            link: listing.link_or_sentinel(),
        }
    }
}

/// Write listings as `title,price,date,link` CSV, header included
pub fn write_csv<W: Write>(writer: W, listings: &[Listing]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if listings.is_empty() {
        // serialize() only emits the header alongside the first row
        wtr.write_record(["title", "price", "date", "link"])?;
    }
    for listing in listings {
        wtr.serialize(ExportRow::from(listing))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save every listing to a UTF-8 CSV file, replacing it if present
pub fn save_csv(path: &Path, listings: &[Listing]) -> Result<()> {
    info!("💾 Saving to '{}'", path.display());

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, listings).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("💾 Saved {} listings to {}", listings.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, date: Option<&str>, link: Option<&str>) -> Listing {
        Listing {
            title: title.to_string(),
            price: "£1,050.00".to_string(),
            price_value: 1050.0,
            date: date.map(str::to_string),
            link: link.map(str::to_string),
        }
    }

    fn to_string(listings: &[Listing]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, listings).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_csv_rows() {
        let listings = vec![
            listing("MacBook Air M2", Some("12 Mar 2024"), Some("https://x.test/itm/1")),
            listing("MacBook Air, 13\"", None, Some("https://x.test/itm/2")),
        ];

        let csv = to_string(&listings);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "title,price,date,link");
        assert_eq!(lines[1], "MacBook Air M2,\"£1,050.00\",12 Mar 2024,https://x.test/itm/1");
        assert_eq!(
            lines[2],
            "\"MacBook Air, 13\"\"\",\"£1,050.00\",N/A,https://x.test/itm/2"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_csv_empty_still_has_header() {
        assert_eq!(to_string(&[]), "title,price,date,link\n");
    }
}
