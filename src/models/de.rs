//! Deserialization helpers for snapshot columns that hold whole numbers.
//!
//! Dataframe exports write integer columns containing nulls as floats, so a
//! runtime of two hours may arrive as `120` or `120.0`.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
}

impl RawNumber {
    fn into_whole<E: Error>(self) -> Result<i64, E> {
        match self {
            RawNumber::Int(value) => Ok(value),
            RawNumber::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                Ok(value as i64)
            }
            RawNumber::Float(value) => Err(E::custom(format!(
                "expected a whole number, found {}",
                value
            ))),
        }
    }
}

/// Deserializes a required whole number from an integer or integral float
pub fn whole<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawNumber::deserialize(deserializer)?.into_whole()
}

/// Deserializes an optional whole number; `null` and absent both map to `None`
pub fn opt_whole<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawNumber>::deserialize(deserializer)?
        .map(RawNumber::into_whole::<D::Error>)
        .transpose()
}
