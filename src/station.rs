use std::fmt;

use serde::{de::IgnoredAny, de::Visitor, Deserialize, Deserializer};

use crate::location::Location;

/// One station row from a snapshot. Field handling is tolerant of the
/// variations seen in exported feeds: coordinates may arrive as numeric
/// strings and the virtual flag as 0/1 or a true/false string.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    #[serde(default)]
    pub station_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(deserialize_with = "f64_from_str")]
    pub latitude: f64,

    #[serde(deserialize_with = "f64_from_str")]
    pub longitude: f64,

    #[serde(deserialize_with = "bool_from_loose")]
    pub is_virtual_station: bool,

    #[serde(default)]
    pub availability_ratio: MetricValue,

    #[serde(default)]
    pub avg_num_of_available: MetricValue,
}

impl StationRecord {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// An optional numeric field, keeping apart the ways a value can be missing:
/// the key not present at all, present as JSON null, or present but not a
/// usable number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MetricValue {
    #[default]
    Absent,
    Null,
    Invalid,
    Value(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MetricVisitor)
    }
}

struct MetricVisitor;

impl<'de> Visitor<'de> for MetricVisitor {
    type Value = MetricValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.is_finite() {
            Ok(MetricValue::Value(v))
        } else {
            Ok(MetricValue::Invalid)
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MetricValue::Value(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MetricValue::Value(v as f64))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(MetricValue::Value(parsed)),
            _ => Ok(MetricValue::Invalid),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MetricValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MetricValue::Null)
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MetricValue::Invalid)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(MetricValue::Invalid)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(MetricValue::Invalid)
    }
}

struct LooseBoolVisitor;

impl<'de> Visitor<'de> for LooseBoolVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, a 0/1 number, or a true/false string")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v != 0)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v != 0)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.is_finite() {
            Ok(v != 0.0)
        } else {
            Err(E::custom("non-finite number is not a boolean"))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "0" => Ok(false),
            _ => Err(E::custom(format!("invalid boolean value '{v}'"))),
        }
    }
}

fn bool_from_loose<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LooseBoolVisitor)
}

struct F64Visitor;

impl<'de> Visitor<'de> for F64Visitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a float string or as a floating point number")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse::<f64>().map_err(serde::de::Error::custom)
    }
}

fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(F64Visitor)
}
