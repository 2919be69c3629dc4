//! Monetary values as stored in the ledger document.
//!
//! The ledger stores whatever amount it is given, including non-finite values
//! that JSON numbers cannot express. Those are written as the strings `"NaN"`,
//! `"Infinity"` and `"-Infinity"`; on read a `null` (as older documents carry
//! for such values) becomes `NaN`, so the surrounding record survives a reload.

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StoredAmount>::deserialize(deserializer)? {
        None => Ok(f64::NAN),
        Some(StoredAmount::Number(value)) => Ok(value),
        Some(StoredAmount::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount `{raw}`"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        value: f64,
    }

    fn decode(raw: &str) -> Result<f64, serde_json::Error> {
        serde_json::from_str::<Holder>(raw).map(|holder| holder.value)
    }

    #[test]
    fn non_finite_values_survive_a_roundtrip() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let raw = serde_json::to_string(&Holder { value }).unwrap();
            assert_eq!(decode(&raw).unwrap(), value);
        }
        let raw = serde_json::to_string(&Holder { value: f64::NAN }).unwrap();
        assert_eq!(raw, r#"{"value":"NaN"}"#);
        assert!(decode(&raw).unwrap().is_nan());
    }

    #[test]
    fn null_reads_as_nan_and_garbage_is_rejected() {
        assert!(decode(r#"{"value":null}"#).unwrap().is_nan());
        assert_eq!(decode(r#"{"value":12.5}"#).unwrap(), 12.5);
        assert_eq!(decode(r#"{"value":"7"}"#).unwrap(), 7.0);
        assert!(decode(r#"{"value":"five"}"#).is_err());
        assert!(decode(r#"{"value":[1]}"#).is_err());
    }
}
