//! # caesar-guard
//!
//! Two small text utilities shipped as separate binaries:
//!
//! - `encrypt` shifts the letters of its argument three places through the
//!   alphabet (a Caesar cipher).
//! - `password-validation` checks its argument against a fixed password
//!   policy and prints every rule it breaks.
//!
//! ## Modules
//!
//! - [`cipher`] - Caesar shift over `A`–`Z` and `a`–`z`
//! - [`password`] - Password rules, policy and JSON report
//! - [`cli`] - Logging, version, completions and exit handling for the binaries
//!
//! ## Example
//!
//! ```
//! use caesar_guard::cipher::encrypt;
//! use caesar_guard::password::validate;
//!
//! assert_eq!(encrypt("abc", 3), "def");
//! assert_eq!(
//!     validate("alllowercase123"),
//!     vec![
//!         "Password must contain at least one uppercase letter.",
//!         "Password must contain at least one symbol.",
//!     ]
//! );
//! ```

pub mod cipher;
pub mod cli;
pub mod password;
