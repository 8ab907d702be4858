//! Tool argument parsing and validation.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::custom::CustomKind;
use crate::error::{Error, Result};

/// Number of records a single call may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "f64")]
pub struct Count(u8);

impl Count {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<f64> for Count {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        // JSON numbers arrive as floats; only whole values in range are accepted.
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(format!("count must be an integer, got {value}"));
        }
        if value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            return Err(format!(
                "count must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            ));
        }
        Ok(Self(value as u8))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CountArgs {
    #[serde(default)]
    pub count: Count,
}

#[derive(Debug, Deserialize)]
pub struct CustomArgs {
    #[serde(rename = "type")]
    pub kind: CustomKind,
    #[serde(default)]
    pub count: Count,
}

/// Deserialize an optional argument object into `T`.
///
/// Missing arguments are treated as an empty object so that defaults apply.
pub fn parse<T: for<'de> Deserialize<'de>>(arguments: Option<Map<String, Value>>) -> Result<T> {
    let value = Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| Error::InvalidArguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn count_defaults_to_one() {
        let args: CountArgs = parse(None).unwrap();
        assert_eq!(args.count.get(), 1);

        let args: CountArgs = parse(object(json!({}))).unwrap();
        assert_eq!(args.count.get(), 1);
    }

    #[test]
    fn count_accepts_bounds() {
        let args: CountArgs = parse(object(json!({ "count": 1 }))).unwrap();
        assert_eq!(args.count.get(), 1);
        let args: CountArgs = parse(object(json!({ "count": 100 }))).unwrap();
        assert_eq!(args.count.get(), 100);
        let args: CountArgs = parse(object(json!({ "count": 7.0 }))).unwrap();
        assert_eq!(args.count.get(), 7);
    }

    #[test]
    fn count_rejects_out_of_range() {
        for bad in [json!(0), json!(101), json!(-3), json!(2.5)] {
            let err = parse::<CountArgs>(object(json!({ "count": bad }))).unwrap_err();
            assert!(matches!(err, Error::InvalidArguments(_)), "{bad}");
        }
    }

    #[test]
    fn count_rejects_non_numbers() {
        for bad in [json!("3"), json!(null), json!([1]), json!(true)] {
            assert!(parse::<CountArgs>(object(json!({ "count": bad }))).is_err());
        }
    }

    #[test]
    fn custom_requires_known_type() {
        let args: CustomArgs = parse(object(json!({ "type": "email", "count": 2 }))).unwrap();
        assert_eq!(args.kind, CustomKind::Email);
        assert_eq!(args.count.get(), 2);

        let err = parse::<CustomArgs>(object(json!({ "type": "spaceship" }))).unwrap_err();
        assert!(err.to_string().contains("spaceship"));
        assert!(parse::<CustomArgs>(object(json!({ "count": 2 }))).is_err());
    }

    #[test]
    fn count_constructor_checks_range() {
        assert!(Count::new(0).is_none());
        assert_eq!(Count::new(5).map(Count::get), Some(5));
        assert!(Count::new(101).is_none());
    }
}
