//! The 12-digit Digital Access Number.
//!
//! Layout: `[country: 3][state: 2][location: 7]`, displayed as `CCC-SS-LLLLLLL`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::error::DanError;
use crate::state::{self, State};

/// National country code every DAN starts with.
pub const COUNTRY_CODE: &str = "234";

/// Number of digits in a DAN.
pub const DAN_LENGTH: usize = 12;

/// Largest location code (7 digits).
pub const MAX_LOCATION_CODE: u32 = 9_999_999;

const STATE_OFFSET: usize = 3;
const LOCATION_OFFSET: usize = 5;

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{12}$").unwrap())
}

/// Removes `-` and whitespace separators.
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// A validated Digital Access Number.
///
/// Holds the bare digit string. Two DANs are equal iff their digits are equal,
/// regardless of how they were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dan(String);

impl Dan {
    /// Parses a DAN, accepting optional `-`/whitespace separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use dannav::dan::Dan;
    ///
    /// let dan = Dan::parse("234-24-8472910").unwrap();
    /// assert_eq!(dan.as_str(), "234248472910");
    /// assert_eq!(dan.state().name, "Lagos");
    /// ```
    pub fn parse(input: &str) -> Result<Self, DanError> {
        let digits = strip_separators(input);

        if !digits_pattern().is_match(&digits) {
            return Err(DanError::Format(input.to_string()));
        }

        let country = &digits[..STATE_OFFSET];
        if country != COUNTRY_CODE {
            return Err(DanError::CountryCode {
                expected: COUNTRY_CODE,
                found: country.to_string(),
            });
        }

        let code = &digits[STATE_OFFSET..LOCATION_OFFSET];
        if state::by_code(code).is_none() {
            return Err(DanError::UnknownStateCode(code.to_string()));
        }

        Ok(Self(digits))
    }

    /// Assembles a DAN from a state and a location code.
    ///
    /// Location codes above [`MAX_LOCATION_CODE`] are reduced modulo 10^7.
    pub fn from_parts(state: &State, location_code: u32) -> Self {
        let location = location_code % (MAX_LOCATION_CODE + 1);
        Self(format!("{}{}{:07}", COUNTRY_CODE, state.code, location))
    }

    /// The bare 12-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..STATE_OFFSET]
    }

    pub fn state_code(&self) -> &str {
        &self.0[STATE_OFFSET..LOCATION_OFFSET]
    }

    /// The 7-digit location code as written.
    pub fn location_code(&self) -> &str {
        &self.0[LOCATION_OFFSET..]
    }

    /// The location code as an integer.
    pub fn location_value(&self) -> u32 {
        // Seven ASCII digits always fit in a u32.
        self.location_code()
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// The state this DAN belongs to.
    pub fn state(&self) -> &'static State {
        state::by_code(self.state_code())
            .expect("DAN state code is validated on construction")
    }

    /// Canonical display form `CCC-SS-LLLLLLL`.
    pub fn formatted(&self) -> String {
        format!(
            "{}-{}-{}",
            self.country_code(),
            self.state_code(),
            self.location_code()
        )
    }
}

/// Formats a DAN string into its canonical `CCC-SS-LLLLLLL` display form.
pub fn format_dan(input: &str) -> Result<String, DanError> {
    Dan::parse(input).map(|dan| dan.formatted())
}

impl fmt::Display for Dan {
    /// Bare digits by default, `CCC-SS-LLLLLLL` with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.formatted())
        } else {
            f.write_str(&self.0)
        }
    }
}

impl FromStr for Dan {
    type Err = DanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Dan {
    type Error = DanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Dan> for String {
    fn from(dan: Dan) -> Self {
        dan.0
    }
}

impl AsRef<str> for Dan {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
