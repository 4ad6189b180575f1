//! The 18-character resident ID number: strict parsing, checksum
//! validation, and birth-date/age derivation.

use chrono::{Datelike, NaiveDate};

use crate::IdError;

/// Positional weights for characters 0-16 of the ID number.
const CHECK_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by the weighted sum modulo 11.
const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Byte offset of the embedded `YYYYMMDD` birth date.
const BIRTH_DATE_OFFSET: usize = 6;
const BIRTH_DATE_LEN: usize = 8;

/// A validated 18-character resident ID number.
///
/// An instance can only be constructed through [`CitizenId::parse`], so
/// holding one implies the string has the correct shape (17 digits followed
/// by a digit or uppercase `X`) and a matching mod-11 check character.
///
/// The embedded birth date is validated separately via
/// [`CitizenId::birth_date`]; a checksum-valid ID can still carry an
/// impossible date such as `20230230`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitizenId(String);

impl CitizenId {
    /// Parses and validates an ID number.
    ///
    /// Checks, in order: non-empty, exact length 18, character classes,
    /// and the weighted mod-11 checksum. The check character comparison is
    /// case-sensitive; only uppercase `X` is accepted.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if s.len() != 18 {
            return Err(IdError::InvalidLength { actual: s.len() });
        }

        let bytes = s.as_bytes();
        if !bytes[..17].iter().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidFormat);
        }
        let check = bytes[17] as char;
        if !check.is_ascii_digit() && check != 'X' {
            return Err(IdError::InvalidFormat);
        }

        let sum: u32 = bytes[..17]
            .iter()
            .zip(CHECK_WEIGHTS)
            .map(|(b, weight)| u32::from(b - b'0') * weight)
            .sum();
        let expected = CHECK_CODES[(sum % 11) as usize];
        if check != expected {
            return Err(IdError::ChecksumMismatch {
                expected,
                actual: check,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the ID number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts and validates the embedded birth date.
    ///
    /// The eight digits at offset 6 are parsed with strict `YYYYMMDD`
    /// semantics and then re-serialized; the result must equal the original
    /// digits exactly, so values a lenient parser would clamp (day 32,
    /// month 13) are rejected.
    pub fn birth_date(&self) -> Result<NaiveDate, IdError> {
        let digits = &self.0[BIRTH_DATE_OFFSET..BIRTH_DATE_OFFSET + BIRTH_DATE_LEN];
        let date = NaiveDate::parse_from_str(digits, "%Y%m%d").map_err(|_| {
            IdError::InvalidBirthDate {
                digits: digits.to_owned(),
            }
        })?;
        if date.format("%Y%m%d").to_string() != digits {
            return Err(IdError::InvalidBirthDate {
                digits: digits.to_owned(),
            });
        }
        Ok(date)
    }
}

impl std::fmt::Display for CitizenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CitizenId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for CitizenId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CitizenId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Completed calendar years between `birth` and `on`.
///
/// `on.year - birth.year`, minus one if the birthday has not yet occurred
/// in `on`'s year, clamped at zero. Month/day pairs are compared directly,
/// so a Feb 29 birthday has not occurred on Feb 28 of a common year and
/// the age increments on Mar 1.
#[must_use]
pub fn completed_years(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
