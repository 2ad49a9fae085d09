//! Deserialization of ids that clients send either as numbers or numeric strings.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Accept `5` as well as `"5"`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("'{}' is not a numeric id", text))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::deserialize")]
        id: i64,
    }

    #[test]
    fn test_number_and_string_forms() {
        let a: Holder = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id": " 5 "}"#).unwrap();
        assert_eq!(a.id, 5);
        assert_eq!(b.id, 5);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": "five"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id": true}"#).is_err());
    }
}
