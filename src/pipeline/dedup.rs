use crate::models::Listing;
use std::collections::HashSet;

/// Keep the first listing seen for each link, in input order.
///
/// Listings without a link have no identity and are dropped.
pub fn dedupe<I>(candidates: I) -> Vec<Listing>
where
    I: IntoIterator<Item = Listing>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for listing in candidates {
        let Some(link) = listing.link.as_deref() else {
            continue;
        };
        if seen.insert(link.to_string()) {
            unique.push(listing);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_link(title: &str, link: Option<&str>) -> Listing {
        Listing {
            title: title.to_string(),
            price: "£1.00".to_string(),
            price_value: 1.0,
            date: None,
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let candidates = vec![
            with_link("first A", Some("A")),
            with_link("second A", Some("A")),
            with_link("B", Some("B")),
            with_link("no link 1", None),
            with_link("no link 2", None),
        ];

        let unique = dedupe(candidates);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "first A");
        assert_eq!(unique[0].link.as_deref(), Some("A"));
        assert_eq!(unique[1].link.as_deref(), Some("B"));
    }

    #[test]
    fn test_order_is_discovery_order() {
        let candidates = vec![
            with_link("c", Some("C")),
            with_link("a", Some("A")),
            with_link("b", Some("B")),
            with_link("a again", Some("A")),
        ];

        let titles: Vec<_> = dedupe(candidates).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
