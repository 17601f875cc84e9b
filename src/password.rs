//! Password strength rules.
//!
//! A password is checked against three independent rules. Every rule is
//! evaluated, so a single call reports all violations in rule order:
//!
//! 1. At least [`PasswordPolicy::min_length`] characters (12 by default)
//! 2. At least one uppercase letter (any script, so `É` counts)
//! 3. At least one symbol, meaning any character outside `A-Z`, `a-z`, `0-9`
//!
//! Whitespace and non-ASCII characters count as symbols.

use serde::{Deserialize, Serialize};

fn default_min_length() -> usize {
    12
}

/// A single failed password rule.
///
/// Variants are declared in the order rules are evaluated, so sorting
/// violations yields report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// Fewer characters than the policy minimum
    TooShort,
    /// No uppercase character
    MissingUppercase,
    /// Every character is an ASCII letter or digit
    MissingSymbol,
}

/// Parameters the rules are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum number of characters (default: 12)
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl PasswordPolicy {
    /// Check `password` against every rule, returning violations in rule order.
    pub fn check(&self, password: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Length counts characters, not UTF-8 bytes
        if password.chars().count() < self.min_length {
            violations.push(Violation::TooShort);
        }

        // Unicode uppercase, not just A-Z
        if !password.chars().any(char::is_uppercase) {
            violations.push(Violation::MissingUppercase);
        }

        if !password.chars().any(is_symbol) {
            violations.push(Violation::MissingSymbol);
        }

        violations
    }

    /// Human-readable message for `violation` under this policy.
    pub fn describe(&self, violation: Violation) -> String {
        match violation {
            Violation::TooShort => format!(
                "Password must be at least {} characters.",
                self.min_length
            ),
            Violation::MissingUppercase => {
                "Password must contain at least one uppercase letter.".to_string()
            }
            Violation::MissingSymbol => "Password must contain at least one symbol.".to_string(),
        }
    }

    /// Build a serializable report for `password`.
    pub fn report(&self, password: &str) -> ValidationReport {
        let violations: Vec<ReportedViolation> = self
            .check(password)
            .into_iter()
            .map(|rule| ReportedViolation {
                rule,
                message: self.describe(rule),
            })
            .collect();

        ValidationReport {
            valid: violations.is_empty(),
            policy: *self,
            violations,
        }
    }
}

/// Anything that is not an ASCII letter or digit.
fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// A violation as it appears in a JSON report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedViolation {
    pub rule: Violation,
    pub message: String,
}

/// Outcome of checking one password, emitted by `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub policy: PasswordPolicy,
    pub violations: Vec<ReportedViolation>,
}

/// Validate `password` with the default policy.
///
/// Returns the messages of every failed rule in rule order; an empty vector
/// means the password is acceptable.
///
/// ```
/// use caesar_guard::password::validate;
///
/// assert!(validate("LongEnoughPassw0rd!").is_empty());
/// assert_eq!(validate("short").len(), 3);
/// ```
pub fn validate(password: &str) -> Vec<String> {
    let policy = PasswordPolicy::default();
    policy
        .check(password)
        .into_iter()
        .map(|violation| policy.describe(violation))
        .collect()
}
