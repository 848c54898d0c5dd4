//! Client-side input validation for the login form.
//!
//! The two predicates are plain function pointers held in [`Validators`] so
//! callers can swap the policy without touching the form state machine.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Outcome of validating one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub email_valid: bool,
    pub password_valid: bool,
    pub role_selected: bool,
    pub can_submit: bool,
}

/// Pluggable validation predicates.
#[derive(Clone, Copy, Debug)]
pub struct Validators {
    pub check_email: fn(&str) -> bool,
    pub check_password: fn(&str) -> bool,
}

impl Default for Validators {
    fn default() -> Self {
        Self { check_email, check_password }
    }
}

impl Validators {
    #[must_use]
    pub fn validate(&self, email: &str, password: &str, role_selected: bool) -> ValidationResult {
        let email_valid = (self.check_email)(email);
        let password_valid = (self.check_password)(password);
        ValidationResult {
            email_valid,
            password_valid,
            role_selected,
            can_submit: email_valid && password_valid && role_selected && !email.is_empty() && !password.is_empty(),
        }
    }
}

/// Validate with the built-in predicates.
#[must_use]
pub fn validate(email: &str, password: &str, role_selected: bool) -> ValidationResult {
    Validators::default().validate(email, password, role_selected)
}

/// True when `email` looks like `local@domain.tld`.
#[must_use]
pub fn check_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

/// True when `password` has at least eight characters, one uppercase letter,
/// and one digit.
#[must_use]
pub fn check_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(char::is_uppercase)
        && password.chars().any(|c| c.is_ascii_digit())
}
