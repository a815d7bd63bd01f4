use crate::models::{Field, RawListing};
use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// One results card per sold listing
pub const CARD_SELECTOR: &str = "li.s-card";

const FIELD_SELECTORS: &[(Field, &str)] = &[
    (Field::Title, "div.s-card__title span.su-styled-text.primary.default"),
    (Field::Price, "span.s-card__price"),
    (Field::Date, "span.su-styled-text.positive.default"),
    (Field::Link, "a[href]"),
];

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {}", css, e))
}

/// Pull raw fragments out of a results page, one `RawListing` per card.
///
/// Fields whose element is missing from a card are left unset.
pub fn parse_cards(html: &str) -> Result<Vec<RawListing>> {
    let card_selector = selector(CARD_SELECTOR)?;
    let field_selectors = FIELD_SELECTORS
        .iter()
        .map(|(field, css)| Ok((*field, selector(css)?)))
        .collect::<Result<Vec<_>>>()?;

    let document = Html::parse_document(html);
    let cards: Vec<RawListing> = document
        .select(&card_selector)
        .map(|card| read_card(card, &field_selectors))
        .collect();
    info!("Found {} listing cards in HTML", cards.len());

    Ok(cards)
}

fn read_card(card: ElementRef<'_>, field_selectors: &[(Field, Selector)]) -> RawListing {
    let mut raw = RawListing::default();

    for (field, selector) in field_selectors {
        let Some(element) = card.select(selector).next() else {
            debug!("Card has no {:?} element", field);
            continue;
        };

        match field {
            Field::Link => {
                if let Some(href) = element.value().attr("href") {
                    raw.set(*field, href);
                }
            }
            _ => raw.set(*field, element.text().collect::<String>()),
        }
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body><ul class="srp-results">
          <li class="s-card">
            <div class="s-card__title">
              <span class="su-styled-text primary default">Nintendo Switch OLED White</span>
            </div>
            <span class="su-styled-text positive default">Sold  12 Mar 2024</span>
            <span class="s-card__price">£210.00</span>
            <a href="https://www.ebay.co.uk/itm/111?hash=item1a">link</a>
          </li>
          <li class="s-card">
            <span class="s-card__price">£20.00</span>
          </li>
          <li class="s-card">
            <div class="s-card__title">
              <span class="su-styled-text primary default">Shop on eBay</span>
            </div>
            <a>no href</a>
          </li>
        </ul></body></html>
    "#;

    #[test]
    fn test_parse_cards_reads_every_field() {
        let cards = parse_cards(RESULTS_PAGE).unwrap();
        assert_eq!(cards.len(), 3);

        let first = &cards[0];
        assert_eq!(first.title.as_deref(), Some("Nintendo Switch OLED White"));
        assert_eq!(first.price.as_deref(), Some("£210.00"));
        assert_eq!(first.date.as_deref(), Some("Sold  12 Mar 2024"));
        assert_eq!(
            first.link.as_deref(),
            Some("https://www.ebay.co.uk/itm/111?hash=item1a")
        );
    }

    #[test]
    fn test_parse_cards_leaves_missing_fields_unset() {
        let cards = parse_cards(RESULTS_PAGE).unwrap();

        assert_eq!(cards[1].title, None);
        assert_eq!(cards[1].price.as_deref(), Some("£20.00"));
        assert_eq!(cards[2].price, None);
        assert_eq!(cards[2].link, None);
    }

    #[test]
    fn test_parse_cards_without_results() {
        let cards = parse_cards("<html><body><p>No results</p></body></html>").unwrap();
        assert!(cards.is_empty());
    }
}
