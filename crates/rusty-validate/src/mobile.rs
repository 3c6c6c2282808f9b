//! Mobile number validation

/// Digits in a mobile number (no country code)
pub const MOBILE_LENGTH: usize = 10;

/// Validates a 10-digit mobile number with no separators or prefix
pub fn validate_mobile(mobile: &str) -> Result<(), String> {
    if mobile.chars().any(char::is_whitespace) {
        return Err("mobile must not contain spaces".to_string());
    }

    if let Some(bad) = mobile.chars().find(|c| !c.is_ascii_digit()) {
        return Err(format!("mobile contains non-digit character '{}'", bad));
    }

    if mobile.len() != MOBILE_LENGTH {
        return Err(format!(
            "mobile must be exactly {} digits, got {}",
            MOBILE_LENGTH,
            mobile.len()
        ));
    }

    Ok(())
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    validate_mobile(mobile).is_ok()
}
