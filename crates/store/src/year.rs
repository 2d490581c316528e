use serde::{de, Deserialize, Deserializer};

/// Deserializes a publication year written as a number, a numeric string, or
/// left empty. `null` and blank strings read as `0`.
///
/// Use with `#[serde(deserialize_with = "lenient_year")]`.
pub fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }

    match Option::<Year>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Year::Number(year)) => Ok(year),
        Some(Year::Text(text)) => match text.trim() {
            "" => Ok(0),
            digits => digits.parse().map_err(de::Error::custom),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "lenient_year")]
        year: i32,
    }

    fn year(raw: &str) -> Result<i32, serde_json::Error> {
        serde_json::from_str::<Dated>(raw).map(|dated| dated.year)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(year(r#"{"year": 1965}"#).unwrap(), 1965);
        assert_eq!(year(r#"{"year": " 1965 "}"#).unwrap(), 1965);
    }

    #[test]
    fn empty_values_read_as_zero() {
        assert_eq!(year(r#"{"year": null}"#).unwrap(), 0);
        assert_eq!(year(r#"{"year": ""}"#).unwrap(), 0);
        assert_eq!(year("{}").unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(year(r#"{"year": "soon"}"#).is_err());
    }
}
