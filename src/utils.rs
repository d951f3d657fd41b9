/// Placeholder printed for aggregates over an empty table.
pub const NOT_AVAILABLE: &str = "n/a";

/// Formats an optional f64 without trailing zeros, or returns "n/a" if None or non-finite.
pub fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let text = format!("{x:.4}");
            text.trim_end_matches('0').trim_end_matches('.').to_owned()
        }
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Formats any optional displayable value, or returns "n/a" if None.
pub fn fmt_or_na<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| NOT_AVAILABLE.to_owned(), |x| x.to_string())
}
