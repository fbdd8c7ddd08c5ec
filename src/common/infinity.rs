//! `serde_json` writes non-finite floats as `null`,
//! which cannot be read back as `f64`.
//! Fields tagged with `#[serde(with = "infinity")]`
//! store `±∞` as the strings `"inf"` / `"-inf"` instead.
use serde::{Deserialize, Deserializer, Serializer};
use serde::de::Error;


#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}


pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer,
{
    if *value == f64::INFINITY {
        serializer.serialize_str("inf")
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str("-inf")
    } else {
        serializer.serialize_f64(*value)
    }
}


pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where D: Deserializer<'de>,
{
    match Repr::deserialize(deserializer)? {
        Repr::Number(v) => Ok(v),
        Repr::Text(t) => match t.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(
                format!("expected a number, `inf` or `-inf`, got `{other}`")
            )),
        },
    }
}
