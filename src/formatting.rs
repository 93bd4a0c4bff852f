use crate::sorting::numeric_value;
use crate::types::Loose;

/// Shown wherever a value is missing
pub const PLACEHOLDER: &str = "—";

/// Escape text for use inside HTML element content or a quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The value if present and non-empty, otherwise the placeholder
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER,
    }
}

/// Same as [`or_placeholder`] for loosely typed values; zero counts as missing
pub fn loose_or_placeholder(value: Option<&Loose>) -> String {
    match value {
        Some(v) if v.is_truthy() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Present values are shown as-is (zero included)
pub fn loose_or_default(value: Option<&Loose>, default: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| default.to_string())
}

/// One decimal place, or the placeholder when absent or not a number.
///
/// Uses the same conversion as the points sort keys so the displayed value
/// always matches the sorted one.
pub fn format_fixed1(value: Option<&Loose>) -> String {
    match value.and_then(numeric_value) {
        Some(n) => format!("{:.1}", n),
        None => PLACEHOLDER.to_string(),
    }
}

/// Rank movement chip: `▲ 2`, `▼ 3` or `— 0`
pub fn delta_chip(delta: f64) -> String {
    let (class, text) = if delta > 0.0 {
        ("up", format!("▲ {}", delta))
    } else if delta < 0.0 {
        ("down", format!("▼ {}", delta.abs()))
    } else {
        ("flat", format!("{} 0", PLACEHOLDER))
    };
    format!(r#"<span class="chip delta {}">{}</span>"#, class, text)
}
