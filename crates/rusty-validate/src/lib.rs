//! Rusty-Validate
//!
//! String validation predicates for form input: email addresses, mobile
//! numbers, password strength and a configurable string rule set.
//!
//! Each predicate answers with a plain `bool`. Why a value was rejected is
//! kept on the side in a log keyed by rule name (`"email"`, `"mobile"`,
//! `"password"`, `"string"`), which [`log`] reads and [`clear`] empties.
//!
//! ```
//! use rusty_validate::StringOptions;
//!
//! assert!(rusty_validate::email("john@example.com"));
//! assert!(rusty_validate::mobile("9924248232"));
//! assert!(rusty_validate::password("abcdefghia", 5));
//! assert!(!rusty_validate::string("ababab", &StringOptions::new().no_repetition()));
//! ```
//!
//! The free functions share one process-wide [`Validator`]. Create your own
//! with [`Validator::new`] or [`Validator::with_config`] for an isolated log.

pub mod candidate;
pub mod config;
pub mod email;
pub mod log;
pub mod mobile;
pub mod password;
pub mod string;
pub mod validator;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

pub use candidate::Candidate;
pub use config::{Config, PasswordConfig};
pub use email::{is_valid_email, validate_email};
pub use log::{Rule, ValidationLog};
pub use mobile::{is_valid_mobile, validate_mobile};
pub use password::{strength, validate_password};
pub use string::{validate_string, StringOptions};
pub use validator::Validator;

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::new);

/// The validator behind the free functions
pub fn default_validator() -> &'static Validator {
    &DEFAULT_VALIDATOR
}

/// See [`Validator::email`]
pub fn email<'a>(value: impl Into<Candidate<'a>>) -> bool {
    DEFAULT_VALIDATOR.email(value)
}

/// See [`Validator::mobile`]
pub fn mobile<'a>(value: impl Into<Candidate<'a>>) -> bool {
    DEFAULT_VALIDATOR.mobile(value)
}

/// See [`Validator::password`]
pub fn password<'a>(value: impl Into<Candidate<'a>>, min_strength: u32) -> bool {
    DEFAULT_VALIDATOR.password(value, min_strength)
}

/// See [`Validator::string`]
pub fn string<'a>(value: impl Into<Candidate<'a>>, options: &StringOptions) -> bool {
    DEFAULT_VALIDATOR.string(value, options)
}

/// Failure log of the process-wide validator
pub fn log() -> BTreeMap<String, String> {
    DEFAULT_VALIDATOR.log()
}

/// Empty the failure log of the process-wide validator
pub fn clear() {
    DEFAULT_VALIDATOR.clear();
}
