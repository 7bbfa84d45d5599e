//! Cell-level text normalization for the converter.

use serde_json::Value;

/// Normalize an identifier cell: trim, reject empties.
pub fn normalize_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a link field into target identifiers. Semicolon is the only
/// delimiter; tokens are trimmed and empties dropped.
pub fn split_link_field(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render multi-line description text as concatenated paragraph spans:
/// each non-empty trimmed line becomes `<p>...</p>`, joined with no
/// separator.
pub fn description_html(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{line}</p>"))
        .collect()
}

/// Coerce a metadata cell to a JSON scalar. Spreadsheet-native numbers
/// arrive as text, so integer- and float-shaped cells re-serialize as JSON
/// numbers; everything else stays a string.
pub fn scalar_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::String(raw.to_string())
}
