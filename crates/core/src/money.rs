//! Money helpers shared by the calculators

/// Round to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Symbol used when rendering an ISO currency code
pub fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_ascii_uppercase().as_str() {
        "CAD" | "USD" => "$",
        "EUR" => "\u{20AC}",
        "GBP" => "\u{00A3}",
        "AUD" => "A$",
        "INR" => "\u{20B9}",
        _ => "",
    }
}

/// Format a whole-dollar amount with comma grouping, e.g. `1,200,000`
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if amount < 0.0 && rounded > 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format an amount for display with no decimals, e.g. `$14,000`
///
/// Unknown currency codes render as `XYZ 14,000`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    let grouped = group_thousands(amount);
    let (sign, digits) = match grouped.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", grouped.as_str()),
    };

    if symbol.is_empty() {
        format!("{}{} {}", sign, currency.to_ascii_uppercase(), digits)
    } else {
        format!("{}{}{}", sign, symbol, digits)
    }
}
