//! Small shared utilities

use serde::{Deserialize, Deserializer};

/// Current Unix time in milliseconds
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Current Unix time in seconds
pub fn now_secs() -> u64 {
    now_millis() / 1000
}

/// Deserialize an optional field the backend emits as either a string or a
/// number (order/invoice numbers drift between the two).
pub fn de_opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "de_opt_string_or_number")]
        number: Option<String>,
    }

    #[test]
    fn test_string_or_number() {
        let s: Doc = serde_json::from_str(r#"{"number":"INV-7"}"#).unwrap();
        assert_eq!(s.number.as_deref(), Some("INV-7"));
        let n: Doc = serde_json::from_str(r#"{"number":1042}"#).unwrap();
        assert_eq!(n.number.as_deref(), Some("1042"));
        let missing: Doc = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.number, None);
        let empty: Doc = serde_json::from_str(r#"{"number":""}"#).unwrap();
        assert_eq!(empty.number, None);
    }
}
