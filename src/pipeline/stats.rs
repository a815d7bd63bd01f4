use crate::models::{Listing, PriceStatistics};

/// Half-width of the displayed price band, as a fraction of the mean
const BAND: f64 = 0.05;

/// Mean price over listings with a positive amount, banded ±5%.
///
/// Returns `None` when no listing has a usable price.
pub fn aggregate(listings: &[Listing]) -> Option<PriceStatistics> {
    let prices: Vec<f64> = listings
        .iter()
        .map(|l| l.price_value)
        .filter(|p| *p > 0.0)
        .collect();

    if prices.is_empty() {
        return None;
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    Some(PriceStatistics {
        mean,
        lower_bound: mean * (1.0 - BAND),
        upper_bound: mean * (1.0 + BAND),
        count: prices.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(value: f64) -> Listing {
        Listing {
            title: "Item".to_string(),
            price: format!("£{value:.2}"),
            price_value: value,
            date: None,
            link: None,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_band() {
        let stats = aggregate(&[priced(100.0), priced(200.0), priced(300.0)]).unwrap();

        assert!(close(stats.mean, 200.0));
        assert!(close(stats.lower_bound, 190.0));
        assert!(close(stats.upper_bound, 210.0));
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_unpriced_listings_are_ignored() {
        let stats = aggregate(&[priced(0.0), priced(50.0), priced(150.0)]).unwrap();

        assert!(close(stats.mean, 100.0));
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_absent_without_prices() {
        assert_eq!(aggregate(&[]), None);
        assert_eq!(aggregate(&[priced(0.0)]), None);
    }
}
