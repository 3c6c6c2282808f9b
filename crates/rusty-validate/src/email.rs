//! Email validation functions

/// Shortest address accepted (`a@b.co`)
pub const MIN_EMAIL_LENGTH: usize = 6;

/// Longest address accepted, the RFC 5321 path limit
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validates email format
///
/// Checks for:
/// - Length between 6 and 254 characters
/// - A local part that is either dot-separated atoms or a quoted string
/// - A domain that is either dot-separated labels ending in an alphabetic
///   top-level label of two or more letters, or a bracketed IPv4 literal
pub fn validate_email(email: &str) -> Result<(), String> {
    let length = email.chars().count();
    if length < MIN_EMAIL_LENGTH {
        return Err(format!(
            "email must be at least {} characters",
            MIN_EMAIL_LENGTH
        ));
    }
    if length > MAX_EMAIL_LENGTH {
        return Err(format!(
            "email must be at most {} characters",
            MAX_EMAIL_LENGTH
        ));
    }

    let domain = if email.starts_with('"') {
        split_quoted_local(email)?
    } else {
        split_dotted_local(email)?
    };

    if let Some(literal) = domain.strip_prefix('[') {
        let address = literal
            .strip_suffix(']')
            .ok_or_else(|| "email domain literal is not closed".to_string())?;
        validate_ipv4(address)
    } else {
        validate_domain_name(domain)
    }
}

/// Shorthand for [`validate_email`] when only the outcome matters
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Characters allowed in an unquoted local part segment
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '/' | '=' | '?' | '^' | '_'
                | '`' | '{' | '|' | '}' | '~'
        )
}

/// Characters allowed bare inside a quoted local part
fn is_qtext(c: char) -> bool {
    matches!(c as u32, 0x01..=0x08 | 0x0b | 0x0c | 0x0e..=0x1f | 0x21 | 0x23..=0x5b | 0x5d..=0x7f)
}

/// Characters allowed after a backslash inside a quoted local part
fn is_quoted_pair(c: char) -> bool {
    matches!(c as u32, 0x01..=0x09 | 0x0b | 0x0c | 0x0e..=0x7f)
}

/// Consumes `"..."@` and returns the domain
fn split_quoted_local(email: &str) -> Result<&str, String> {
    let mut chars = email.char_indices().skip(1);
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => {
                let rest = &email[index + 1..];
                return rest
                    .strip_prefix('@')
                    .ok_or_else(|| "email quoted local part must be followed by '@'".to_string());
            }
            '\\' => match chars.next() {
                Some((_, escaped)) if is_quoted_pair(escaped) => {}
                _ => return Err("email local part has an invalid escape".to_string()),
            },
            c if is_qtext(c) => {}
            c => {
                return Err(format!(
                    "email quoted local part contains invalid character '{}'",
                    c
                ))
            }
        }
    }
    Err("email quoted local part is not terminated".to_string())
}

/// Consumes `atom(.atom)*@` and returns the domain
fn split_dotted_local(email: &str) -> Result<&str, String> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| "email is missing '@'".to_string())?;

    for segment in local.split('.') {
        if segment.is_empty() {
            return Err("email local part has an empty dot segment".to_string());
        }
        if let Some(bad) = segment.chars().find(|&c| !is_atext(c)) {
            return Err(format!(
                "email local part contains invalid character '{}'",
                bad
            ));
        }
    }

    Ok(domain)
}

fn validate_domain_name(domain: &str) -> Result<(), String> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("email domain must contain a top-level domain".to_string());
    }

    for label in &labels {
        if label.is_empty() {
            return Err("email domain has an empty label".to_string());
        }
        if let Some(bad) = label
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(format!("email domain contains invalid character '{}'", bad));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!(
                "email domain label '{}' must start and end with a letter or digit",
                label
            ));
        }
    }

    // Non-empty is guaranteed by the loop above
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "email top-level domain '{}' must be at least two letters",
            tld
        ));
    }

    Ok(())
}

fn validate_ipv4(address: &str) -> Result<(), String> {
    let octets: Vec<&str> = address.split('.').collect();
    let well_formed = octets.len() == 4
        && octets.iter().all(|octet| {
            (1..=3).contains(&octet.len())
                && octet.chars().all(|c| c.is_ascii_digit())
                && octet.parse::<u16>().map_or(false, |n| n <= 255)
        });

    if well_formed {
        Ok(())
    } else {
        Err(format!("email domain literal '[{}]' is not an IPv4 address", address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john@example.com")]
    #[case("john.doe@example.com")]
    #[case("\"<sam>\"@example.com")]
    #[case("foo.bar.baz@example.com")]
    #[case("foo.bar@[192.168.122.113]")]
    #[case("foo.bar@example01.az")]
    #[case("s@s.co")]
    #[case("user+tag@mail-server.example.org")]
    #[case("\"john\\\"doe\"@example.com")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{} should be valid", email);
    }

    #[rstest]
    #[case("<sam>@example.com")]
    #[case("sam.(dos)@example.com")]
    #[case("\"sam.dos@example.com")]
    #[case("sam@example.c0")]
    #[case("sam@example.c")]
    #[case("s@s.c")]
    #[case(".sam@example.com")]
    #[case("sam.@example.com")]
    #[case("sa..m@example.com")]
    #[case("sam@-example.com")]
    #[case("sam@example-.com")]
    #[case("sam@example..com")]
    #[case("sam@localhost")]
    #[case("sam@@example.com")]
    #[case("sam.example.com")]
    #[case("sam@[256.1.1.1]")]
    #[case("sam@[1.2.3]")]
    #[case("sam@[1.2.3.4")]
    #[case("\"sam\"example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{} should be invalid", email);
    }

    #[test]
    fn test_length_boundaries() {
        let domain = "@example.com";
        let local_254 = "a".repeat(MAX_EMAIL_LENGTH - domain.len());
        assert!(is_valid_email(&format!("{}{}", local_254, domain)));

        let local_255 = "a".repeat(MAX_EMAIL_LENGTH + 1 - domain.len());
        assert_eq!(
            validate_email(&format!("{}{}", local_255, domain)),
            Err("email must be at most 254 characters".to_string())
        );
    }

    #[test]
    fn test_reason_names_offending_character() {
        assert_eq!(
            validate_email("<sam>@example.com"),
            Err("email local part contains invalid character '<'".to_string())
        );
        assert_eq!(
            validate_email("\"sam.dos@example.com"),
            Err("email quoted local part is not terminated".to_string())
        );
    }
}
