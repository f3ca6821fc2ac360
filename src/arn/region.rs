//! Region value object for SNS resource identifiers.
//!
//! A region is written `{name}-{area}-{number}` (for example `eu-west-1`),
//! where the name must be one of the supported geographic prefixes.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Geographic prefix of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionName {
    /// United States
    Us,
    /// Europe
    Eu,
    /// Asia Pacific
    Ap,
    /// Canada
    Ca,
    /// South America
    Sa,
}

impl RegionName {
    /// All supported region names.
    pub const ALL: [RegionName; 5] = [
        RegionName::Us,
        RegionName::Eu,
        RegionName::Ap,
        RegionName::Ca,
        RegionName::Sa,
    ];

    /// The lowercase token used in region strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionName::Us => "us",
            RegionName::Eu => "eu",
            RegionName::Ap => "ap",
            RegionName::Ca => "ca",
            RegionName::Sa => "sa",
        }
    }
}

impl FromStr for RegionName {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedRegion {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated region such as `eu-west-1`.
///
/// ## Examples
///
/// ```rust
/// use sns_push::arn::{Region, RegionName};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let region = Region::parse("eu-west-1")?;
///     assert_eq!(region.name(), RegionName::Eu);
///     assert_eq!(region.area(), "west");
///     assert_eq!(region.number(), 1);
///     assert_eq!(region.to_string(), "eu-west-1");
///
///     assert!(Region::parse("mars-north-1").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    name: RegionName,
    area: String,
    number: u32,
}

impl Region {
    /// Create a region from its raw parts, validating the name and area.
    pub fn new(name: &str, area: impl Into<String>, number: u32) -> ValidationResult<Self> {
        Self::from_parts(name.parse()?, area, number)
    }

    /// Create a region from an already validated name.
    ///
    /// The area must be non-empty and free of `-` and `:`, otherwise the
    /// formatted region would not parse back.
    pub fn from_parts(
        name: RegionName,
        area: impl Into<String>,
        number: u32,
    ) -> ValidationResult<Self> {
        let area = area.into();
        if area.is_empty() || area.contains(['-', ':']) {
            return Err(ValidationError::malformed(
                area,
                "the region area must be non-empty and cannot contain '-' or ':'",
            ));
        }

        Ok(Self { name, area, number })
    }

    /// Parse a region string.
    ///
    /// The string must split on `-` into exactly three parts and the last
    /// part must be a non-negative integer written without sign or leading
    /// zeros.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        let parts: Vec<&str> = value.split('-').collect();

        let [name, area, number] = parts.as_slice() else {
            return Err(ValidationError::malformed(
                value,
                format!(
                    "the region is malformed, expected 3 '-'-separated parts, found {}",
                    parts.len()
                ),
            ));
        };

        let number = Self::parse_number(number).ok_or_else(|| {
            ValidationError::malformed(value, "the region number must be a non-negative integer")
        })?;

        Self::new(name, *area, number).map_err(|e| match e {
            ValidationError::MalformedInput { reason, .. } => {
                ValidationError::malformed(value, reason)
            }
            other => other,
        })
    }

    /// Only the canonical decimal form, so that formatting gives the input back.
    fn parse_number(number: &str) -> Option<u32> {
        let digits_only = !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit());
        let leading_zero = number.len() > 1 && number.starts_with('0');

        if digits_only && !leading_zero {
            number.parse().ok()
        } else {
            None
        }
    }

    pub fn name(&self) -> RegionName {
        self.name
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.area, self.number)
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Region {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
