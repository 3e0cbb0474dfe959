use thiserror::Error;

/// Error type for password composition rules.
///
/// The `Display` output of each variant is the user-facing message for the
/// first rule a password violates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingNumber,

    #[error("Password must contain at least one special character (@$!%*?&)")]
    MissingSpecialChar,
}
