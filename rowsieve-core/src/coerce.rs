use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn years_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([-+]?\d+(?:\.\d+)?)\s*years?\b").expect("Invalid regex pattern")
    })
}

fn number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("Invalid regex pattern"))
}

/// Best-effort numeric coercion for ordering comparisons.
///
/// Strings are tried in a fixed order: direct parse after stripping
/// whitespace and thousands-separator commas, then a `"<n> year(s)"`
/// duration pattern (so `"20 years, 196 days"` yields `20`), then the
/// first signed decimal substring. The duration pattern must run before
/// the generic fallback; reordering changes which magnitude a duration
/// string resolves to.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            let clean = s.replace(',', "");
            if let Ok(n) = clean.parse::<f64>() {
                return Some(n);
            }
            if let Some(caps) = years_pattern().captures(&clean) {
                if let Ok(n) = caps[1].parse::<f64>() {
                    return Some(n);
                }
            }
            if let Some(m) = number_pattern().find(&clean) {
                if let Ok(n) = m.as_str().parse::<f64>() {
                    return Some(n);
                }
            }
            None
        }
        _ => None,
    }
}

/// Canonical gender token for a string value, if it denotes one.
/// Matching is case-insensitive and ignores non-letter characters,
/// so `"M."` and `"Male"` both canonicalize to `"male"`.
fn canonical_gender_token(value: &Value) -> Option<&'static str> {
    let s = value.as_str()?;
    let token: String = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match token.as_str() {
        "m" | "male" | "males" | "man" | "men" => Some("male"),
        "f" | "female" | "females" | "woman" | "women" => Some("female"),
        _ => None,
    }
}

/// Tolerant equality used by `eq`/`ne`/`in`/`nin`.
///
/// Gender tokens compare by their canonical form, two strings compare
/// case-insensitively after trimming, and anything else falls back to
/// structural equality.
pub fn text_equal(a: &Value, b: &Value) -> bool {
    if let (Some(ga), Some(gb)) = (canonical_gender_token(a), canonical_gender_token(b)) {
        return ga == gb;
    }
    if let (Value::String(sa), Value::String(sb)) = (a, b) {
        return sa.trim().to_lowercase() == sb.trim().to_lowercase();
    }
    a == b
}
