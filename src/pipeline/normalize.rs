//! Per-field text cleaning for raw listing fragments.

use regex::Regex;
use std::sync::LazyLock;

/// Boilerplate the results page mixes into card titles, removed in order.
const TITLE_NOISE: &[&str] = &[
    r"Opens in a new window or tab",
    r"New listing",
    r"Pre-owned",
    r"Brand new",
    r"Buy It Now",
    r"View similar active items",
    r"Sell one like this",
    r"Last one",
    r"or Best Offer",
    r"Sponsored",
    r"product ratings",
    r"out of 5 stars",
    r"Sold\s+\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}",
];

const TITLE_SEPARATOR: &str = " - ";

static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TITLE_NOISE
        .iter()
        .map(|phrase| Regex::new(&format!("(?i){phrase}")).expect("noise pattern is valid"))
        .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static STERLING_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£\d[\d,]*(?:\.\d+)?").expect("price pattern is valid"));

static SOLD_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}")
        .expect("date pattern is valid")
});

/// Strip boilerplate from a card title.
///
/// Returns `None` when the input is empty or nothing is left after
/// cleaning. Noise stripping repeats until the text is stable; the
/// separator decision is then made once.
pub fn clean_title(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let mut text = raw.to_string();
    loop {
        let next = strip_noise(&text);
        if next == text {
            break;
        }
        text = next;
    }

    let title = drop_redundant_segment(&text);
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn strip_noise(text: &str) -> String {
    let stripped = NOISE_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "").into_owned()
        });
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Only the first two `" - "` segments are compared; later ones are dropped.
fn drop_redundant_segment(text: &str) -> String {
    let mut segments = text.split(TITLE_SEPARATOR).map(str::trim);
    let (Some(head), Some(tail)) = (segments.next(), segments.next()) else {
        return text.to_string();
    };

    // "Brand - Brand Model" keeps the tail, "Model - Condition" keeps the head
    if tail.to_lowercase().contains(&head.to_lowercase()) {
        tail.to_string()
    } else {
        head.to_string()
    }
}

/// First `£`-prefixed amount in the text, or an empty string.
pub fn clean_price(raw: &str) -> String {
    STERLING_AMOUNT
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First "DD MMM YYYY" date in the text.
pub fn clean_date(raw: &str) -> Option<String> {
    SOLD_DATE.find(raw).map(|m| m.as_str().to_string())
}
