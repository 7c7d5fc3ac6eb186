/// Lenient field decoders for provider payloads
///
/// Providers are loose about JSON types: numbers arrive as strings, flags as 0/1,
/// objects as empty strings. Each decoder accepts the plausible encodings of its
/// target type and turns anything else into `None`, so one odd field never fails
/// the decode of a whole response.
///
/// Used with `#[serde(default, deserialize_with = "...")]` on `Option` fields.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text, with numbers and booleans rendered as their JSON text
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// `true`/`false`, nonzero/zero numbers, and their string spellings
pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim() {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Some(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Whole numbers, as JSON numbers or numeric strings
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    })
}

/// Decimal numbers, as JSON numbers or numeric strings
pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// Any nested shape; a value that does not fit becomes `None`
pub fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then(|| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        name: Option<String>,
        #[serde(deserialize_with = "boolean")]
        flag: Option<bool>,
        #[serde(deserialize_with = "integer")]
        count: Option<i64>,
        #[serde(deserialize_with = "float")]
        ratio: Option<f64>,
        #[serde(deserialize_with = "or_none")]
        tags: Option<Vec<String>>,
    }

    fn decode(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_native_types_pass_through() {
        let s = decode(r#"{"name": "Pepe", "flag": true, "count": 18, "ratio": 0.5, "tags": ["a"]}"#);
        assert_eq!(s.name.as_deref(), Some("Pepe"));
        assert_eq!(s.flag, Some(true));
        assert_eq!(s.count, Some(18));
        assert_eq!(s.ratio, Some(0.5));
        assert_eq!(s.tags, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_string_encoded_values() {
        let s = decode(r#"{"name": 42, "flag": "1", "count": "18", "ratio": "2.5"}"#);
        assert_eq!(s.name.as_deref(), Some("42"));
        assert_eq!(s.flag, Some(true));
        assert_eq!(s.count, Some(18));
        assert_eq!(s.ratio, Some(2.5));

        let s = decode(r#"{"flag": 0, "count": 9.0}"#);
        assert_eq!(s.flag, Some(false));
        assert_eq!(s.count, Some(9));
    }

    #[test]
    fn test_mismatched_values_become_none() {
        let s = decode(
            r#"{"name": {"x": 1}, "flag": "maybe", "count": "lots", "ratio": [], "tags": "none"}"#,
        );
        assert_eq!(s.name, None);
        assert_eq!(s.flag, None);
        assert_eq!(s.count, None);
        assert_eq!(s.ratio, None);
        assert_eq!(s.tags, None);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let s = decode(r#"{"name": null, "count": 2.5}"#);
        assert_eq!(s.name, None);
        assert_eq!(s.count, None);
        assert_eq!(s.flag, None);
    }
}
