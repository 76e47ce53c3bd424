//! Parse-or-default decoding of stored blobs.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DaybookError, Result};

/// Outcome of decoding a stored value.
///
/// Malformed or missing data never propagates as an error; it turns into
/// `UseDefault` and the caller picks the default.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Value(T),
    UseDefault,
}

impl<T> Decoded<T> {
    pub fn is_default(&self) -> bool {
        matches!(self, Decoded::UseDefault)
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Decoded::Value(value) => value,
            Decoded::UseDefault => default,
        }
    }

    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Decoded::Value(value) => value,
            Decoded::UseDefault => default(),
        }
    }
}

impl<T: Default> Decoded<T> {
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

/// Decode the raw blob stored under `key`.
pub fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Decoded<T> {
    let Some(text) = raw else {
        return Decoded::UseDefault;
    };
    match serde_json::from_str(text) {
        Ok(value) => Decoded::Value(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding malformed stored value");
            Decoded::UseDefault
        }
    }
}

/// Decode a blob that is about to be rewritten.
///
/// A missing blob is the default. A blob that is present but unreadable is
/// an error, so the write cannot replace data it never understood.
pub fn decode_for_write<T>(key: &str, raw: Option<&str>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match decode(key, raw) {
        Decoded::Value(value) => Ok(value),
        Decoded::UseDefault if raw.is_none() => Ok(T::default()),
        Decoded::UseDefault => Err(DaybookError::Storage(format!(
            "stored {} could not be read; refusing to overwrite it",
            key
        ))),
    }
}

/// Encode a value for storage.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        let decoded: Decoded<Vec<u32>> = decode("numbers", None);
        assert!(decoded.is_default());
        assert_eq!(decoded.unwrap_or_default(), Vec::<u32>::new());
    }

    #[test]
    fn test_malformed_value_uses_default() {
        let decoded: Decoded<Vec<u32>> = decode("numbers", Some("{not json"));
        assert_eq!(decoded, Decoded::UseDefault);
    }

    #[test]
    fn test_wrong_shape_uses_default() {
        let decoded: Decoded<Vec<u32>> = decode("numbers", Some(r#"{"a":1}"#));
        assert_eq!(decoded.unwrap_or(vec![9]), vec![9]);
    }

    #[test]
    fn test_decode_for_write_refuses_unreadable_blob() {
        let missing: Vec<u32> = decode_for_write("numbers", None).unwrap();
        assert!(missing.is_empty());

        let err = decode_for_write::<Vec<u32>>("numbers", Some("{not json")).unwrap_err();
        assert!(matches!(err, DaybookError::Storage(_)));
        assert!(err.to_string().contains("numbers"));
    }

    #[test]
    fn test_valid_value_decodes() {
        let decoded: Decoded<Vec<u32>> = decode("numbers", Some("[1,2,3]"));
        assert_eq!(decoded, Decoded::Value(vec![1, 2, 3]));
    }
}
