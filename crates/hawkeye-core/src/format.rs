//! Display helpers for report views

/// Placeholder for undefined values
pub const MISSING: &str = "—";

/// Format a price the Vietnamese way: `.` between thousands, `,` before up to
/// three fraction digits, trailing zeros dropped.
///
/// ```
/// use hawkeye_core::format::format_price;
///
/// assert_eq!(format_price(28500.0), "28.500");
/// assert_eq!(format_price(1234567.891), "1.234.567,891");
/// assert_eq!(format_price(-26936.5), "-26.936,5");
/// ```
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return MISSING.to_string();
    }

    let rounded = format!("{:.3}", price.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let negative = price < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Percentage with an explicit sign, e.g. `+12.3%` or `-5.5%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Risk/reward ratio as `x.xx:1`, or the placeholder when undefined.
pub fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| MISSING.to_string(), |r| format!("{r:.2}:1"))
}

/// Any optional value through `f`, or the placeholder.
pub fn or_missing<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| MISSING.to_string(), f)
}
