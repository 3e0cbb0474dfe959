pub mod errors;
pub mod rules;
pub mod strength;

pub use errors::PasswordRuleError;
pub use rules::validate;
pub use strength::score;
pub use strength::PasswordStrength;
pub use strength::StrengthLabel;
