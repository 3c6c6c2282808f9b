// File: src/validator.rs
// Purpose: Validator context owning the failure log

use std::collections::BTreeMap;

use crate::candidate::Candidate;
use crate::config::Config;
use crate::email::validate_email;
use crate::log::{Rule, ValidationLog};
use crate::mobile::validate_mobile;
use crate::password::validate_password;
use crate::string::{validate_string, StringOptions};

/// Runs the validation rules and remembers why each one last failed
///
/// Every predicate returns `true` or `false`. On `false` the reason is
/// stored under the rule name; on `true` that entry is removed.
///
/// ```
/// use rusty_validate::{StringOptions, Validator};
///
/// let validator = Validator::new();
/// assert!(validator.email("john@example.com"));
/// assert!(!validator.string("abcd", &StringOptions::new().min(5)));
/// assert_eq!(
///     validator.log().get("string").map(String::as_str),
///     Some("min: Must be at least 5 characters")
/// );
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    config: Config,
    log: ValidationLog,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator using presets and defaults from `config`
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            log: ValidationLog::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying log
    pub fn failures(&self) -> &ValidationLog {
        &self.log
    }

    /// Check an email address
    pub fn email<'a>(&self, value: impl Into<Candidate<'a>>) -> bool {
        self.run(Rule::Email, value.into(), validate_email)
    }

    /// Check a 10-digit mobile number
    pub fn mobile<'a>(&self, value: impl Into<Candidate<'a>>) -> bool {
        self.run(Rule::Mobile, value.into(), validate_mobile)
    }

    /// Check a password is long enough and at least `min_strength` strong
    pub fn password<'a>(&self, value: impl Into<Candidate<'a>>, min_strength: u32) -> bool {
        self.run(Rule::Password, value.into(), |text| {
            validate_password(text, min_strength)
        })
    }

    /// Check a password against the configured minimum strength
    pub fn password_default<'a>(&self, value: impl Into<Candidate<'a>>) -> bool {
        self.password(value, self.config.password.min_strength)
    }

    /// Check a string against every rule set in `options`
    pub fn string<'a>(&self, value: impl Into<Candidate<'a>>, options: &StringOptions) -> bool {
        self.run(Rule::String, value.into(), |text| validate_string(text, options))
    }

    /// Check a string against the named preset from the config
    pub fn string_rule<'a>(&self, name: &str, value: impl Into<Candidate<'a>>) -> bool {
        match self.config.string_rule(name) {
            Some(options) => self.string(value, options),
            None => {
                self.log
                    .record(Rule::String, format!("unknown string rule '{}'", name));
                false
            }
        }
    }

    /// Copy of the failure log, keyed by rule name
    pub fn log(&self) -> BTreeMap<String, String> {
        self.log.snapshot()
    }

    /// Empty the failure log
    pub fn clear(&self) {
        self.log.clear();
    }

    fn run<F>(&self, rule: Rule, value: Candidate<'_>, check: F) -> bool
    where
        F: FnOnce(&str) -> Result<(), String>,
    {
        match value.require_text(rule.as_str()).and_then(check) {
            Ok(()) => {
                self.log.forget(rule);
                true
            }
            Err(reason) => {
                self.log.record(rule, reason);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_non_text_input_fails_every_rule() {
        let validator = Validator::new();
        let object = json!({});
        let options = StringOptions::new();

        for value in [Candidate::Absent, Candidate::Other, Candidate::from(&object)] {
            assert!(!validator.email(value));
            assert!(!validator.mobile(value));
            assert!(!validator.password(value, 5));
            assert!(!validator.string(value, &options));
        }

        assert_eq!(
            validator.log().get("email").map(String::as_str),
            Some("email is not a string")
        );
    }

    #[test]
    fn test_empty_text_fails_every_rule() {
        let validator = Validator::new();
        assert!(!validator.email(""));
        assert!(!validator.mobile(""));
        assert!(!validator.password("", 5));
        assert!(!validator.string("", &StringOptions::new()));

        let expected: BTreeMap<String, String> = [
            ("email", "email is empty"),
            ("mobile", "mobile is empty"),
            ("password", "password is empty"),
            ("string", "string is empty"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(validator.log(), expected);
    }

    #[test]
    fn test_success_removes_stale_reason() {
        let validator = Validator::new();
        assert!(!validator.mobile("992424823"));
        assert!(validator.failures().get(Rule::Mobile).is_some());

        assert!(validator.mobile("9924248232"));
        assert_eq!(validator.failures().get(Rule::Mobile), None);
    }

    #[test]
    fn test_clear_does_not_change_outcomes() {
        let validator = Validator::new();
        assert!(!validator.email("s@s.c"));
        assert!(!validator.log().is_empty());

        validator.clear();
        assert!(validator.log().is_empty());
        assert!(!validator.email("s@s.c"));
        assert!(validator.email("s@s.co"));
    }

    #[test]
    fn test_password_default_uses_config() {
        let validator = Validator::new();
        assert!(validator.password_default("abcdefghia"));

        let strict = Validator::with_config(
            Config::from_toml("[password]\nmin_strength = 8\n").unwrap(),
        );
        assert!(!strict.password_default("abcdefghia"));
        assert!(strict.password_default("Abcdefghia1!"));
    }

    #[test]
    fn test_string_rule_presets() {
        let config = Config::from_toml("[strings.pincode]\nmatchPostalCode = true\n").unwrap();
        let validator = Validator::with_config(config);

        assert!(validator.string_rule("pincode", "400080"));
        assert!(!validator.string_rule("pincode", "010080"));
        assert!(!validator.string_rule("zipcode", "400080"));
        assert_eq!(
            validator.failures().get(Rule::String).as_deref(),
            Some("unknown string rule 'zipcode'")
        );
    }
}
