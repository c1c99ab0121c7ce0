//! Human-readable rendering of market figures.
//!
//! All helpers are pure. Rounding is half away from zero on the decimal
//! digit being dropped, which is what users read as "half-up" for the
//! positive magnitudes shown in panels.

/// Rounds `value` to `decimals` places and renders it with exactly that many
/// fraction digits.
pub fn fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Formats a dollar magnitude with a B/M/K suffix, e.g. `$2.34M`.
pub fn format_usd(value: f64) -> String {
    if value >= 1e9 {
        format!("${}B", fixed(value / 1e9, 2))
    } else if value >= 1e6 {
        format!("${}M", fixed(value / 1e6, 2))
    } else if value >= 1e3 {
        format!("${}K", fixed(value / 1e3, 2))
    } else {
        format!("${}", fixed(value, 2))
    }
}

/// Formats a live token price. Sub-cent prices keep six decimals.
pub fn format_price(value: f64) -> String {
    if value < 0.01 {
        format!("${}", fixed(value, 6))
    } else {
        format!("${}", fixed(value, 4))
    }
}

/// Parses a price reported as text. Anything unparseable counts as zero.
pub fn parse_price(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Folds `-0.0` into `0.0` so zero always reads as non-negative.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// `+` for non-negative values, nothing extra for negative ones.
pub fn sign_prefix(value: f64) -> &'static str {
    if value >= 0.0 {
        "+"
    } else {
        ""
    }
}

/// Renders a percentage change exactly as received, e.g. `+12.5%` or `-3%`.
pub fn signed_percent(value: f64) -> String {
    let value = unsigned_zero(value);
    format!("{}{}%", sign_prefix(value), value)
}

/// Renders a percentage change with two decimals, e.g. `+4.56%`.
pub fn signed_percent_fixed(value: f64) -> String {
    let value = unsigned_zero(value);
    format!("{}{}%", sign_prefix(value), fixed(value, 2))
}

/// Right-pads `text` with spaces to `width` characters. Longer text is left
/// untouched.
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Groups the integer part with commas and keeps up to three fraction
/// digits, e.g. `1234567.891 -> 1,234,567.891`.
pub fn grouped(value: f64) -> String {
    let rounded = fixed(value.abs(), 3);
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*digit);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out.chars().any(|c| c != '0' && c != ',' && c != '.') {
        out.insert(0, '-');
    }

    out
}
