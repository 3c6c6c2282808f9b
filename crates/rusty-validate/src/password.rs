//! Password validation functions

/// Passwords shorter than this are rejected regardless of strength
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Highest score [`strength`] can return
pub const MAX_STRENGTH: u32 = 10;

/// Strength score of a password, from 0 to [`MAX_STRENGTH`]
///
/// The score is the sum of two parts:
/// - a length tier: 1 point below 6 characters, 2 from 6, 3 from 8,
///   4 from 10, 5 from 12 and 6 from 16
/// - one point per character class present: lowercase, uppercase,
///   digit, and anything else (symbols, whitespace, non-ASCII)
///
/// Ten lowercase letters therefore score 5.
///
/// # Examples
/// ```
/// use rusty_validate::password::strength;
/// assert_eq!(strength("abcdefghia"), 5);
/// assert_eq!(strength("Abcdefghia1!"), 9);
/// ```
pub fn strength(password: &str) -> u32 {
    if password.is_empty() {
        return 0;
    }

    let length_points = match password.chars().count() {
        0..=5 => 1,
        6..=7 => 2,
        8..=9 => 3,
        10..=11 => 4,
        12..=15 => 5,
        _ => 6,
    };

    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_other = password
        .chars()
        .any(|c| !(c.is_lowercase() || c.is_uppercase() || c.is_ascii_digit()));

    let class_points = [has_lowercase, has_uppercase, has_digit, has_other]
        .iter()
        .filter(|&&present| present)
        .count() as u32;

    length_points + class_points
}

/// Validates password length and strength
///
/// Fails when the password is shorter than [`MIN_PASSWORD_LENGTH`] or when
/// its [`strength`] is below `min_strength`.
pub fn validate_password(password: &str, min_strength: u32) -> Result<(), String> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "password must be at least {} characters, got {}",
            MIN_PASSWORD_LENGTH, length
        ));
    }

    let score = strength(password);
    if score < min_strength {
        return Err(format!(
            "password strength {} is below the required {}",
            score, min_strength
        ));
    }

    Ok(())
}
