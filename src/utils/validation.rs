use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A body field that tells an absent key apart from an explicit `null`.
///
/// Use with `#[serde(default)]` so a missing key becomes [`Field::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Field {
    #[default]
    Missing,
    Present(Value),
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Field::Present)
    }
}

/// Reads `value` as an integer of at least 1.
///
/// Integral floats such as `8.0` count as integers; `4.5`, strings and
/// anything below 1 do not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(number) = value.as_u64() {
        return Some(number).filter(|number| *number >= 1);
    }

    value
        .as_f64()
        .filter(|number| number.fract() == 0.0 && *number >= 1.0 && *number <= u64::MAX as f64)
        .map(|number| number as u64)
}

/// A body id may be left out (or empty), otherwise it must equal the id in
/// the route.
pub fn matches_route_id(id: Option<&str>, route_id: &str) -> bool {
    match id {
        None | Some("") => true,
        Some(id) => id == route_id,
    }
}
