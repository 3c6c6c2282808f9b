//! Typed input for the validators
//!
//! Callers frequently hand over values that came out of a form post or a JSON
//! body, where a field may be missing, `null`, or not a string at all. Those
//! cases are folded into [`Candidate`] before any rule runs.

use serde_json::Value;

/// A value offered to a validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Text to validate (may still be empty)
    Text(&'a str),
    /// No value was supplied (`None`, JSON `null`)
    Absent,
    /// Something that is not text (object, array, number, bool)
    Other,
}

impl<'a> Candidate<'a> {
    /// Shared precondition of every rule: the value must be non-empty text.
    ///
    /// Returns the text, or the reason it was rejected, phrased with `field`.
    pub fn require_text(self, field: &str) -> Result<&'a str, String> {
        match self {
            Candidate::Text("") => Err(format!("{} is empty", field)),
            Candidate::Text(text) => Ok(text),
            Candidate::Absent | Candidate::Other => Err(format!("{} is not a string", field)),
        }
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Candidate<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Candidate::Absent, Candidate::Text)
    }
}

impl<'a> From<&'a Value> for Candidate<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Candidate::Text(text),
            Value::Null => Candidate::Absent,
            _ => Candidate::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_passes_precondition() {
        assert_eq!(Candidate::from("abc").require_text("email"), Ok("abc"));
        let owned = String::from("xyz");
        assert_eq!(Candidate::from(&owned).require_text("email"), Ok("xyz"));
    }

    #[test]
    fn test_precondition_reasons() {
        assert_eq!(
            Candidate::from("").require_text("mobile"),
            Err("mobile is empty".to_string())
        );
        assert_eq!(
            Candidate::from(None::<&str>).require_text("mobile"),
            Err("mobile is not a string".to_string())
        );
        assert_eq!(
            Candidate::Other.require_text("mobile"),
            Err("mobile is not a string".to_string())
        );
    }

    #[test]
    fn test_json_values() {
        assert_eq!(Candidate::from(&json!("a@b.co")), Candidate::Text("a@b.co"));
        assert_eq!(Candidate::from(&json!(null)), Candidate::Absent);
        assert_eq!(Candidate::from(&json!({})), Candidate::Other);
        assert_eq!(Candidate::from(&json!(42)), Candidate::Other);
        assert_eq!(Candidate::from(&json!(["a"])), Candidate::Other);
    }
}
