//! Form validation library
//!
//! This library provides the shared validation core for sign-up, sign-in,
//! contact, and newsletter forms: password strength evaluation, an email
//! well-formedness check, and a thin client for the mail API.
//!
//! # Features
//!
//! - `mail` (default): Enables the mail API client (contact + newsletter)
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `MAIL_API_BASE_URL`: Custom base URL for the mail API
//!   (default: `https://api.example.com`)
//!
//! # Example
//!
//! ```rust
//! use formguard::{evaluate_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate_password_strength(&password);
//!
//! assert_eq!(result.level, StrengthLevel::Strong);
//! assert!(result.feedback.is_empty());
//! ```

// Internal modules
mod checks;
mod email;
mod evaluator;
mod types;

#[cfg(feature = "mail")]
pub mod mail;

// Public API
pub use email::is_email_valid;
pub use evaluator::{evaluate_password_strength, is_password_valid};
pub use types::{MAX_SCORE, PasswordStrengthResult, StrengthLevel};

#[cfg(feature = "mail")]
pub use mail::{
    ContactRequest, ErrorPayload, MailClient, MailError, MailResponse, NewsletterRequest,
};
