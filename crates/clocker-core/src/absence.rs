//! Absence reasons as the single source of truth for absence strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a day was not worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsenceType {
    Vacation,
    Sick,
    Holiday,
}

impl AbsenceType {
    /// All known absence types, in display order.
    pub const ALL: [Self; 3] = [Self::Vacation, Self::Sick, Self::Holiday];

    /// String representation for database storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::Sick => "sick",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AbsenceType {
    type Err = UnknownAbsenceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vacation" | "leave" => Ok(Self::Vacation),
            "sick" | "ill" => Ok(Self::Sick),
            "holiday" => Ok(Self::Holiday),
            _ => Err(UnknownAbsenceType(s.to_string())),
        }
    }
}

impl Serialize for AbsenceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AbsenceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown absence strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAbsenceType(String);

impl fmt::Display for UnknownAbsenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown absence type: {} (expected vacation, sick or holiday)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAbsenceType {}
