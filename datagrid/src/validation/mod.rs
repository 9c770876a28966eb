//! Synchronous form validation.
//!
//! # Example
//!
//! ```
//! use datagrid::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("username", "")
//!         .required("Username is required")
//!     .field("email", "someone.example.com")
//!         .contains("@", "Enter a valid email")
//!     .field("password", "hunter2")
//!         .min_length(6, "Password must be at least 6 characters")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.error_for("username"), Some("Username is required"));
//! assert_eq!(result.error_for("email"), Some("Enter a valid email"));
//! assert_eq!(result.error_for("password"), None);
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
