//! Lenient deserialization for text settings

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Accepts a string, number or boolean and keeps it as trimmed text
///
/// The environment provider type-guesses values, so
/// `COFFEESHOP_AUTH__CLIENT_ID=1234567890` arrives as an integer and
/// `COFFEESHOP_AUTH__AUDIENCE=true` as a boolean.
pub(crate) fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.trim().to_string())
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
        self.visit_str(v.encode_utf8(&mut [0; 4]))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::trimmed_string")]
        value: String,
    }

    fn parse(json: &str) -> String {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(parse(r#"{"value": 1234567890}"#), "1234567890");
        assert_eq!(parse(r#"{"value": -7}"#), "-7");
        assert_eq!(parse(r#"{"value": true}"#), "true");
        assert_eq!(parse(r#"{"value": "  coffeeapp "}"#), "coffeeapp");
    }

    #[test]
    fn test_tables_are_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": {"nested": 1}}"#).is_err());
    }
}
