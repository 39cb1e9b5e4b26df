//! Monetization status codes.
//!
//! Statuses travel as bare integers in the ruleset wire format, so the
//! enum carries explicit discriminants and (de)serializes as `u8`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monetization classification of a host (or host + path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// No rule matched; nothing is known about the page.
    Undefined = 0,
    /// Monetization is blocked for the page.
    Blocked = 1,
    /// The page is eligible for monetization.
    Eligible = 2,
}

impl TryFrom<u8> for Status {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Blocked),
            2 => Ok(Self::Eligible),
            _ => Err(()),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_u64(StatusVisitor)
    }
}

struct StatusVisitor;

impl<'de> Visitor<'de> for StatusVisitor {
    type Value = Status;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a status code between 0 and 2")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Status, E> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Status::try_from(v).ok())
            .ok_or_else(|| E::custom(format!("unknown status code {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Status, E> {
        if value < 0 {
            return Err(E::custom(format!("unknown status code {value}")));
        }
        self.visit_u64(value as u64)
    }
}
