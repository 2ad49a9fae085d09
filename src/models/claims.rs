//! JWT Claims model.

use serde::{Deserialize, Deserializer, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    /// Permission scopes such as `post:drinks`
    #[serde(default)]
    pub permissions: Vec<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
    /// Audiences; identity providers send either a single string or an array
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aud: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Check if the token grants the given permission scope
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(audience) => vec![audience],
        OneOrMany::Many(audiences) => audiences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_permissions_claim_grants_nothing() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"barista","exp":4102444800}"#).unwrap();
        assert!(claims.permissions.is_empty());
        assert!(claims.aud.is_empty());
        assert!(!claims.has_permission("get:drinks-detail"));
    }

    #[test]
    fn test_has_permission_is_exact() {
        let claims: Claims = serde_json::from_str(
            r#"{"sub":"manager","exp":4102444800,"permissions":["post:drinks"]}"#,
        )
        .unwrap();
        assert!(claims.has_permission("post:drinks"));
        assert!(!claims.has_permission("post:drink"));
        assert!(!claims.has_permission("delete:drinks"));
    }

    #[test]
    fn test_audience_as_string_or_array() {
        let single: Claims =
            serde_json::from_str(r#"{"sub":"a","exp":4102444800,"aud":"coffee"}"#).unwrap();
        assert_eq!(single.aud, vec!["coffee"]);

        let many: Claims = serde_json::from_str(
            r#"{"sub":"a","exp":4102444800,"aud":["coffee","https://shop.example/userinfo"]}"#,
        )
        .unwrap();
        assert_eq!(many.aud, vec!["coffee", "https://shop.example/userinfo"]);
    }
}
