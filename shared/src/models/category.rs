//! Category Model
//!
//! The backend stores categories inconsistently: sometimes the numeric code
//! ("1"/"2"), sometimes a display label, with historical label variants in
//! older records. This module is the single canonical mapping; everything
//! that displays or submits a category goes through it.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Medical,
    Optical,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Medical, Category::Optical];

    /// Numeric code used by older backend records
    pub fn code(&self) -> u8 {
        match self {
            Category::Medical => 1,
            Category::Optical => 2,
        }
    }

    /// Canonical display label (also the serialized form)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Medical => "Medical",
            Category::Optical => "Optical",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Category::Medical),
            2 => Some(Category::Optical),
            _ => None,
        }
    }

    /// Parse any representation seen in the wild: numeric code, canonical
    /// label, or a historical label variant ("... Medical", "... Opticals").
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(code) = raw.parse::<u8>() {
            return Self::from_code(code);
        }
        let lower = raw.to_ascii_lowercase();
        if lower.contains("optic") {
            Some(Category::Optical)
        } else if lower.contains("medic") {
            Some(Category::Medical)
        } else {
            None
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::String(s) => Category::parse(s),
            serde_json::Value::Number(n) => {
                n.as_u64().and_then(|c| u8::try_from(c).ok()).and_then(Category::from_code)
            }
            _ => None,
        }
        .ok_or_else(|| de::Error::custom(format!("unknown category: {value}")))
    }
}

/// Serde adapter for optional category fields.
///
/// The wire keeps a `category` field on every order line, empty string when
/// nothing is selected yet; unknown historical values degrade to `None`
/// instead of failing the whole document.
pub mod opt {
    use super::Category;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Category>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(category) => serializer.serialize_str(category.label()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Category>, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Category::parse(&s),
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .and_then(|c| u8::try_from(c).ok())
                .and_then(Category::from_code),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_mapping() {
        assert_eq!(Category::Medical.code(), 1);
        assert_eq!(Category::Optical.code(), 2);
        assert_eq!(Category::from_code(1), Some(Category::Medical));
        assert_eq!(Category::from_code(3), None);
        assert_eq!(Category::Medical.label(), "Medical");
    }

    #[test]
    fn test_parse_codes_and_labels() {
        assert_eq!(Category::parse("1"), Some(Category::Medical));
        assert_eq!(Category::parse("2"), Some(Category::Optical));
        assert_eq!(Category::parse("Medical"), Some(Category::Medical));
        assert_eq!(Category::parse("optical"), Some(Category::Optical));
        // Historical label variants
        assert_eq!(Category::parse("Store Opticals"), Some(Category::Optical));
        assert_eq!(Category::parse("Store Medical"), Some(Category::Medical));
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("Grocery"), None);
    }

    #[test]
    fn test_serde_accepts_number_and_string() {
        let from_code: Category = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(from_code, Category::Optical);
        let from_number: Category = serde_json::from_str("1").unwrap();
        assert_eq!(from_number, Category::Medical);
        let from_label: Category = serde_json::from_str("\"Optical\"").unwrap();
        assert_eq!(from_label, Category::Optical);

        assert_eq!(serde_json::to_string(&Category::Medical).unwrap(), "\"Medical\"");
    }

    #[test]
    fn test_serde_rejects_unknown() {
        assert!(serde_json::from_str::<Category>("\"Grocery\"").is_err());
        assert!(serde_json::from_str::<Category>("7").is_err());
    }
}
