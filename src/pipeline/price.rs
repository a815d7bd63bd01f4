/// Parse a display price such as "£1,234.50" into its amount.
///
/// Everything except digits and '.' is dropped before parsing. Returns
/// 0.0 when nothing parseable is left, which callers treat as "unknown".
pub fn parse_price(display: &str) -> f64 {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
