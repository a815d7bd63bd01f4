use chrono::NaiveDate;

/// Placeholder written to exports when a field was not found
pub const NOT_AVAILABLE: &str = "N/A";

/// Which part of a listing card a raw fragment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Price,
    Date,
    Link,
}

/// Unvalidated text captured for one listing card.
///
/// Any field may be missing; the pipeline decides whether what is left
/// still makes a usable record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub title: Option<String>,
    pub price: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl RawListing {
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Price => &mut self.price,
            Field::Date => &mut self.date,
            Field::Link => &mut self.link,
        };
        *slot = Some(text.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Price => self.price.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::Link => self.link.as_deref(),
        }
    }
}

/// A validated, normalized sold listing
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    /// Display form, symbol included (e.g. "£455.50")
    pub price: String,
    /// Parsed amount, 0.0 when the display form could not be parsed
    pub price_value: f64,
    /// "DD MMM YYYY" as printed on the card
    pub date: Option<String>,
    /// Listing URL with the query string removed
    pub link: Option<String>,
}

impl Listing {
    pub fn date_or_sentinel(&self) -> &str {
        self.date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn link_or_sentinel(&self) -> &str {
        self.link.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Sold date as a calendar date, if the card carried one
    pub fn sold_on(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?;
        let normalized = date.split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveDate::parse_from_str(&normalized, "%d %b %Y").ok()
    }
}

/// Mean sold price with a ±5% presentation band.
///
/// The band is a display smoothing, not a confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistics {
    pub mean: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Number of listings with a positive price that went into the mean
    pub count: usize,
}
