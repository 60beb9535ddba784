//! Stop identifier types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A BVG stop identifier, e.g. `900000192504`.
///
/// Stop identifiers are non-empty strings of ASCII digits. They are kept as
/// strings rather than integers because the API treats them as opaque and
/// leading zeros would otherwise be lost.
///
/// # Examples
///
/// ```
/// use board_server::domain::StopId;
///
/// let hbf = StopId::parse("900000003201").unwrap();
/// assert_eq!(hbf.as_str(), "900000003201");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("9000 01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Longest identifier accepted. HAFAS ids are well below this.
    const MAX_LEN: usize = 32;

    /// Parse a stop identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.len() > Self::MAX_LEN {
            return Err(InvalidStopId {
                reason: "too long",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopId {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StopId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Accepts both `"900000003201"` and `900000003201`, since station files
/// written by hand tend to use either.
impl<'de> Deserialize<'de> for StopId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        let raw = Raw::deserialize(deserializer)?;
        let text = match raw {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        };
        StopId::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(StopId::parse("900000192504").is_ok());
        assert!(StopId::parse("0").is_ok());
        assert!(StopId::parse("007").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::parse("").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(StopId::parse("90000O192504").is_err());
        assert!(StopId::parse("-1").is_err());
        assert!(StopId::parse("900 000").is_err());
        assert!(StopId::parse("٩٠٠").is_err());
    }

    #[test]
    fn reject_too_long() {
        let s = "9".repeat(33);
        assert!(StopId::parse(&s).is_err());
    }

    #[test]
    fn leading_zeros_preserved() {
        assert_eq!(StopId::parse("0042").unwrap().as_str(), "0042");
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::parse("900000003201").unwrap();
        assert_eq!(id.to_string(), "900000003201");
        assert_eq!(format!("{:?}", id), "StopId(900000003201)");
    }

    #[test]
    fn deserialize_string_or_number() {
        let a: StopId = serde_json::from_str("\"900000192001\"").unwrap();
        let b: StopId = serde_json::from_str("900000192001").unwrap();
        assert_eq!(a, b);

        assert!(serde_json::from_str::<StopId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<StopId>("-5").is_err());
    }

    #[test]
    fn serialize_as_string() {
        let id = StopId::parse("900000003201").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"900000003201\"");
    }
}
