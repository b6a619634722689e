//! Forgiving field readers for hand-authored layouts.
//!
//! Hand-written JSON spells numbers and names loosely: `600.0` for a weight,
//! `"center"` for an alignment. These readers accept such spellings and leave
//! the strict shapes to everything else.

use super::style::Align;
use serde::{de, Deserialize, Deserializer};

/// An optional integer that may be written as a float. The fraction is dropped.
pub(crate) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|value| non_negative(value).map(|n| n as u32))
        .transpose()
}

/// A heading level that may be written as a float.
pub(crate) fn level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = non_negative::<D::Error>(f64::deserialize(deserializer)?)?;
    Ok(value.min(u8::MAX as f64) as u8)
}

/// An optional alignment name in any letter case. Unrecognized names read as unset.
pub(crate) fn opt_align<'de, D>(deserializer: D) -> Result<Option<Align>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|name| Align::parse(&name)))
}

fn non_negative<E: de::Error>(value: f64) -> Result<f64, E> {
    if value.is_finite() && value >= 0.0 {
        Ok(value.trunc())
    } else {
        Err(E::custom(format!("expected a non-negative number, got {value}")))
    }
}
