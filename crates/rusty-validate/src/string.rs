//! String validation functions
//!
//! [`StringOptions`] holds the independent rules applied by
//! [`validate_string`]. Every rule that is set must pass.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Letters, apostrophe and hyphen
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z'\-]+$").expect("name pattern is valid"));

// Same as a name, plus spaces
static FULLNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z '\-]+$").expect("fullname pattern is valid"));

// Six digits, no leading zero
static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("postal code pattern is valid"));

/// Rules for the generic string validator
///
/// Deserializes from the camelCase keys used in form rule objects:
///
/// ```
/// use rusty_validate::StringOptions;
/// let options = StringOptions::from_json(r#"{"min": 3, "noRepetition": true}"#).unwrap();
/// assert_eq!(options.min, Some(3));
/// assert!(options.no_repetition);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(default)]
    pub no_repetition: bool,
    #[serde(default)]
    pub match_name: bool,
    #[serde(default)]
    pub match_fullname: bool,
    #[serde(default)]
    pub match_postal_code: bool,
}

impl StringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn fixed_length(mut self, length: usize) -> Self {
        self.fixed_length = Some(length);
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn no_repetition(mut self) -> Self {
        self.no_repetition = true;
        self
    }

    pub fn match_name(mut self) -> Self {
        self.match_name = true;
        self
    }

    pub fn match_fullname(mut self) -> Self {
        self.match_fullname = true;
        self
    }

    pub fn match_postal_code(mut self) -> Self {
        self.match_postal_code = true;
        self
    }
}

/// Validates `value` against every rule set in `options`
///
/// Rules are checked in declaration order and the first failure is
/// reported, prefixed with the option name.
pub fn validate_string(value: &str, options: &StringOptions) -> Result<(), String> {
    let length = value.chars().count();

    if let Some(fixed) = options.fixed_length {
        if length != fixed {
            return Err(format!(
                "fixedLength: must be exactly {} characters, got {}",
                fixed, length
            ));
        }
    }

    if let Some(min) = options.min {
        validate_min_length(value, min).map_err(|msg| format!("min: {}", msg))?;
    }

    if let Some(max) = options.max {
        validate_max_length(value, max).map_err(|msg| format!("max: {}", msg))?;
    }

    if options.no_repetition && is_repeated(value) {
        return Err("noRepetition: must not be a repeated sequence".to_string());
    }

    if options.match_name && !is_valid_name(value) {
        return Err(
            "matchName: only letters, apostrophes and hyphens are allowed".to_string(),
        );
    }

    if options.match_fullname && !is_valid_fullname(value) {
        return Err(
            "matchFullname: only letters, spaces, apostrophes and hyphens are allowed"
                .to_string(),
        );
    }

    if options.match_postal_code && !is_valid_postal_code(value) {
        return Err(
            "matchPostalCode: must be 6 digits and not start with 0".to_string(),
        );
    }

    Ok(())
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// True when `s` is a shorter unit repeated two or more times
/// (`"ababab"`, `"yoloyolo"`, `"aa"`)
pub fn is_repeated(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();

    (1..=n / 2)
        .filter(|unit| n % unit == 0)
        .any(|unit| (unit..n).all(|i| chars[i] == chars[i - unit]))
}

pub fn is_valid_name(s: &str) -> bool {
    NAME_REGEX.is_match(s)
}

pub fn is_valid_fullname(s: &str) -> bool {
    FULLNAME_REGEX.is_match(s)
}

pub fn is_valid_postal_code(s: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(s)
}
