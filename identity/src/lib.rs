//! Authentication infrastructure library
//!
//! Provides reusable building blocks for the credential-collection flow and
//! the token-gated services behind it:
//! - Password composition rules and strength scoring
//! - HTTP client for the remote identity provider (sign-in, sign-up, token
//!   introspection)
//!
//! Each consumer defines its own port traits and adapts these
//! implementations. This avoids coupling the client-side flow and the
//! gateway through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password rules
//! ```
//! use identity::password;
//!
//! assert!(password::validate("Password1!").is_ok());
//!
//! let first_violation = password::validate("password").unwrap_err();
//! assert_eq!(
//!     first_violation.to_string(),
//!     "Password must contain at least one uppercase letter",
//! );
//! ```
//!
//! ## Strength scoring
//! ```
//! use identity::password;
//!
//! let strength = password::score("Password1!");
//! assert_eq!(strength.score, 5);
//! assert_eq!(strength.label.to_string(), "Strong");
//! assert_eq!(strength.color, "green");
//! ```

pub mod password;
pub mod provider;

// Re-export commonly used items
pub use password::PasswordRuleError;
pub use password::PasswordStrength;
pub use password::StrengthLabel;
pub use provider::IdentityClient;
pub use provider::ProviderError;
pub use provider::ProviderSession;
pub use provider::ProviderUser;
pub use provider::SignUpMetadata;
