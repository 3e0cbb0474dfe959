use crate::password::errors::PasswordRuleError;

/// Minimum password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted as special by the composition and strength checks.
pub const SPECIAL_CHARS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// Check a password against the composition rules.
///
/// Rules are evaluated in a fixed order and the first violation wins, so
/// the caller always gets a single actionable message:
/// 1. at least [`MIN_LENGTH`] characters
/// 2. at least one ASCII uppercase letter
/// 3. at least one ASCII lowercase letter
/// 4. at least one ASCII digit
/// 5. at least one character from [`SPECIAL_CHARS`]
///
/// # Arguments
/// * `password` - Plaintext password to check
///
/// # Errors
/// * `PasswordRuleError` - First rule violated, carrying the user-facing message
pub fn validate(password: &str) -> Result<(), PasswordRuleError> {
    if password.chars().count() < MIN_LENGTH {
        return Err(PasswordRuleError::TooShort { min: MIN_LENGTH });
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordRuleError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordRuleError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRuleError::MissingNumber);
    }

    if !password.chars().any(|c| SPECIAL_CHARS.contains(&c)) {
        return Err(PasswordRuleError::MissingSpecialChar);
    }

    Ok(())
}
