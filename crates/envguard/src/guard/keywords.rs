//! Accepted shapes of the key list passed to `check`.
//!
//! A caller names either one key, a list of keys, or a strict set. All three
//! collapse into `NormalizedKeys` through `KeywordSpec::normalize`.

use serde_json::Value;

use crate::error::GuardError;

/// One key or a list of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySet {
    Single(String),
    List(Vec<String>),
}

/// Keys to check and how strictly to treat missing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSpec {
    /// One key; missing means a warning.
    Single(String),
    /// Several keys; missing ones produce a warning.
    List(Vec<String>),
    /// Missing keys are an error unless warnings-only mode is requested.
    Strict(KeySet),
}

/// Output of `KeywordSpec::normalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKeys {
    /// Keys in caller order.
    pub keys: Vec<String>,
    pub strict: bool,
    /// Whether the caller passed a bare list (drives message pluralization).
    /// Strict specs are never listed, so their messages stay singular.
    pub listed: bool,
}

impl KeywordSpec {
    /// Strict check of `keys`.
    pub fn strict(keys: impl Into<KeySet>) -> Self {
        Self::Strict(keys.into())
    }

    pub fn normalize(self) -> NormalizedKeys {
        match self {
            Self::Single(key) => NormalizedKeys {
                keys: vec![key],
                strict: false,
                listed: false,
            },
            Self::List(keys) => NormalizedKeys {
                keys,
                strict: false,
                listed: true,
            },
            Self::Strict(set) => NormalizedKeys {
                keys: match set {
                    KeySet::Single(key) => vec![key],
                    KeySet::List(keys) => keys,
                },
                strict: true,
                listed: false,
            },
        }
    }
}

fn key_set(value: &Value) -> Option<KeySet> {
    match value {
        Value::String(key) => Some(KeySet::Single(key.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(KeySet::List),
        _ => None,
    }
}

impl TryFrom<&Value> for KeywordSpec {
    type Error = GuardError;

    /// Accepts `"KEY"`, `["A", "B"]` or `{"strict": "KEY" | ["A", "B"]}`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let spec = match value {
            Value::Object(map) => map.get("strict").and_then(key_set).map(Self::Strict),
            other => key_set(other).map(Self::from),
        };
        spec.ok_or(GuardError::InvalidArgument)
    }
}

impl TryFrom<Value> for KeywordSpec {
    type Error = GuardError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl From<KeySet> for KeywordSpec {
    fn from(keys: KeySet) -> Self {
        match keys {
            KeySet::Single(key) => Self::Single(key),
            KeySet::List(keys) => Self::List(keys),
        }
    }
}

impl From<&str> for KeySet {
    fn from(key: &str) -> Self {
        Self::Single(key.to_string())
    }
}

impl From<String> for KeySet {
    fn from(key: String) -> Self {
        Self::Single(key)
    }
}

impl From<Vec<String>> for KeySet {
    fn from(keys: Vec<String>) -> Self {
        Self::List(keys)
    }
}

impl From<Vec<&str>> for KeySet {
    fn from(keys: Vec<&str>) -> Self {
        Self::List(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for KeySet {
    fn from(keys: &[&str]) -> Self {
        Self::List(keys.iter().map(|key| key.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeySet {
    fn from(keys: [&str; N]) -> Self {
        Self::List(keys.iter().map(|key| key.to_string()).collect())
    }
}

macro_rules! spec_from_key_set {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for KeywordSpec {
                fn from(keys: $ty) -> Self {
                    KeySet::from(keys).into()
                }
            }
        )*
    };
}

spec_from_key_set!(&str, String, Vec<String>, Vec<&str>, &[&str]);

impl<const N: usize> From<[&str; N]> for KeywordSpec {
    fn from(keys: [&str; N]) -> Self {
        KeySet::from(keys).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_single_key_is_lenient() {
        let normalized = KeywordSpec::from("API_KEY").normalize();
        assert_eq!(normalized.keys, vec!["API_KEY"]);
        assert!(!normalized.strict);
        assert!(!normalized.listed);
    }

    #[test]
    fn test_list_is_lenient_and_listed() {
        let normalized = KeywordSpec::from(["A", "B"]).normalize();
        assert_eq!(normalized.keys, vec!["A", "B"]);
        assert!(!normalized.strict);
        assert!(normalized.listed);
    }

    #[test]
    fn test_strict_specs_are_never_listed() {
        let normalized = KeywordSpec::strict("API_KEY").normalize();
        assert_eq!(normalized.keys, vec!["API_KEY"]);
        assert!(normalized.strict);
        assert!(!normalized.listed);

        let normalized = KeywordSpec::strict(vec!["A", "B"]).normalize();
        assert_eq!(normalized.keys, vec!["A", "B"]);
        assert!(normalized.strict);
        assert!(!normalized.listed);
    }

    #[test]
    fn test_json_shapes_are_accepted() {
        assert_eq!(
            KeywordSpec::try_from(json!("API_KEY")).unwrap(),
            KeywordSpec::Single("API_KEY".to_string())
        );
        assert_eq!(
            KeywordSpec::try_from(json!(["A", "B"])).unwrap(),
            KeywordSpec::from(["A", "B"])
        );
        assert_eq!(
            KeywordSpec::try_from(json!({ "strict": ["A"] })).unwrap(),
            KeywordSpec::strict(vec!["A".to_string()])
        );
        assert_eq!(
            KeywordSpec::try_from(json!({ "strict": "A" })).unwrap(),
            KeywordSpec::strict("A")
        );
    }

    #[test]
    fn test_other_json_shapes_are_invalid_arguments() {
        for value in [
            json!(42),
            json!(null),
            json!(true),
            json!(["A", 1]),
            json!({ "keys": ["A"] }),
            json!({ "strict": 7 }),
        ] {
            let result = KeywordSpec::try_from(&value);
            assert!(
                matches!(result, Err(GuardError::InvalidArgument)),
                "{value} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_preserves_key_order(keys in prop::collection::vec("[A-Z][A-Z0-9_]{0,12}", 0..8)) {
            let lenient = KeywordSpec::from(keys.clone()).normalize();
            prop_assert_eq!(&lenient.keys, &keys);
            prop_assert!(!lenient.strict);

            let strict = KeywordSpec::strict(keys.clone()).normalize();
            prop_assert_eq!(&strict.keys, &keys);
            prop_assert!(strict.strict);
        }
    }
}
