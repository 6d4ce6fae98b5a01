//! Price and duration labels

use contracts::domain::common::CardSource;

/// Label used when a record has no usable price.
pub const PRICE_ON_REQUEST: &str = "Price on request";

/// Currency assumed when the CMS omits the code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Where the currency marker goes relative to the amount.
enum Marker {
    Prefix(&'static str),
    Suffix(&'static str),
}

/// Display marker and decimal places for known ISO codes.
fn currency_style(code: &str) -> (Marker, u8) {
    match code {
        "USD" => (Marker::Prefix("$"), 2),
        "EUR" => (Marker::Prefix("€"), 2),
        "GBP" => (Marker::Prefix("£"), 2),
        "AUD" => (Marker::Prefix("A$"), 2),
        "CAD" => (Marker::Prefix("C$"), 2),
        "NZD" => (Marker::Prefix("NZ$"), 2),
        "ZAR" => (Marker::Prefix("R"), 2),
        "JPY" => (Marker::Prefix("¥"), 0),
        "AED" => (Marker::Suffix("AED"), 2),
        "CHF" => (Marker::Suffix("CHF"), 2),
        _ => (Marker::Suffix(""), 2),
    }
}

/// Formats a number with `separator` between thousands and `decimals` digits
/// after the point.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_grouped(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_grouped(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert separators every 3 digits counting from the right
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }
    let grouped = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Currency-aware price label.
///
/// Whole amounts drop their decimals ("$12,500"); fractional amounts keep two
/// ("€9,800.50"). Missing, negative or non-finite amounts yield
/// [`PRICE_ON_REQUEST`]. Unknown currency codes are appended after the amount.
pub fn format_price(amount: Option<f64>, currency: Option<&str>) -> String {
    let amount = match amount.filter(|a| a.is_finite() && *a >= 0.0) {
        Some(a) => a,
        None => return PRICE_ON_REQUEST.to_string(),
    };

    let code = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let (marker, max_decimals) = currency_style(&code);
    // Decide on decimals after rounding to the currency's precision, so
    // 9800.999 reads as a whole amount.
    let scale = 10f64.powi(i32::from(max_decimals));
    let rounded = (amount * scale).round() / scale;
    let decimals = if rounded.fract() == 0.0 {
        0
    } else {
        usize::from(max_decimals)
    };
    let number = format_grouped(rounded, decimals, ',');

    match marker {
        Marker::Prefix(symbol) => format!("{}{}", symbol, number),
        Marker::Suffix("") => format!("{} {}", number, code),
        Marker::Suffix(symbol) => format!("{} {}", number, symbol),
    }
}

/// Price label for a record, card price first, legacy price second.
pub fn resolve_price_label<R: CardSource + ?Sized>(resource: &R) -> String {
    let card = resource.card();
    let amount = card.and_then(|c| c.price).or_else(|| resource.legacy_price());
    let currency = card
        .and_then(|c| c.currency.as_deref())
        .or_else(|| resource.legacy_currency());
    format_price(amount, currency)
}

/// Duration label: the CMS text when present, otherwise derived from a day count.
pub fn format_duration(label: Option<&str>, days: Option<u32>) -> String {
    if let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) {
        return label.to_string();
    }
    match days {
        Some(0) | None => String::new(),
        Some(1) => "1 day".to_string(),
        Some(n) => format!("{} days", n),
    }
}

/// Duration label for a record, card text first, then legacy text, then `days`.
pub fn resolve_duration_label<R: CardSource + ?Sized>(resource: &R, days: Option<u32>) -> String {
    let label = resource
        .card()
        .and_then(|c| c.duration.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .or_else(|| resource.legacy_duration());
    format_duration(label, days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c001_tour_package::aggregate::TourPackage;
    use contracts::domain::common::CardBlock;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234.567, 0, ','), "1,235");
        assert_eq!(format_grouped(1234.567, 2, ','), "1,234.57");
        assert_eq!(format_grouped(1234567.0, 0, ' '), "1 234 567");
        assert_eq!(format_grouped(-1234.0, 0, ','), "-1,234");
        assert_eq!(format_grouped(0.0, 2, ','), "0.00");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(12500.0), Some("usd")), "$12,500");
        assert_eq!(format_price(Some(9800.5), Some("EUR")), "€9,800.50");
        assert_eq!(format_price(Some(4200.0), Some("CHF")), "4,200 CHF");
        assert_eq!(format_price(Some(1_000_000.4), Some("JPY")), "¥1,000,000");
        assert_eq!(format_price(Some(750.0), Some("SEK")), "750 SEK");
        assert_eq!(format_price(Some(3100.0), None), "$3,100");
    }

    #[test]
    fn test_format_price_rounds_before_dropping_decimals() {
        assert_eq!(format_price(Some(9800.999), Some("EUR")), "€9,801");
        assert_eq!(format_price(Some(9800.004), Some("USD")), "$9,800");
        assert_eq!(format_price(Some(9800.996), Some("GBP")), "£9,801");
        assert_eq!(format_price(Some(9800.25), Some("GBP")), "£9,800.25");
    }

    #[test]
    fn test_format_price_missing() {
        assert_eq!(format_price(None, Some("USD")), PRICE_ON_REQUEST);
        assert_eq!(format_price(Some(-1.0), None), PRICE_ON_REQUEST);
        assert_eq!(format_price(Some(f64::NAN), None), PRICE_ON_REQUEST);
    }

    #[test]
    fn test_resolve_price_label() {
        let tour = TourPackage {
            card: Some(CardBlock {
                price: Some(15800.0),
                currency: Some("GBP".into()),
                ..Default::default()
            }),
            price: Some(1.0),
            currency: Some("USD".into()),
            ..Default::default()
        };
        assert_eq!(resolve_price_label(&tour), "£15,800");

        let legacy = TourPackage {
            price: Some(6400.0),
            currency: Some("EUR".into()),
            ..Default::default()
        };
        assert_eq!(resolve_price_label(&legacy), "€6,400");
        assert_eq!(resolve_price_label(&TourPackage::default()), PRICE_ON_REQUEST);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some("10 nights"), Some(3)), "10 nights");
        assert_eq!(format_duration(Some("  "), Some(1)), "1 day");
        assert_eq!(format_duration(None, Some(8)), "8 days");
        assert_eq!(format_duration(None, Some(0)), "");
        assert_eq!(format_duration(None, None), "");
    }

    #[test]
    fn test_resolve_duration_label() {
        let tour = TourPackage {
            card: Some(CardBlock {
                duration: Some("".into()),
                ..Default::default()
            }),
            duration: Some("7 nights".into()),
            ..Default::default()
        };
        assert_eq!(resolve_duration_label(&tour, Some(8)), "7 nights");
        assert_eq!(resolve_duration_label(&TourPackage::default(), Some(4)), "4 days");
    }
}
