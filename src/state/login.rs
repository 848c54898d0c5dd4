//! Login form state machine.
//!
//! DESIGN
//! ======
//! The form moves through `Idle -> Validating -> Submitting -> Settled`.
//! A submit event drives `begin_submit`; the network result drives `settle`.
//! Nothing here touches the DOM or the network, so the page component only
//! forwards events and renders the resulting flags.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::LoginError;
use crate::net::types::{Credentials, Role};
use crate::util::validators::{ValidationResult, Validators};

/// Lifecycle phase of one login attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Settled,
}

/// The client/tutor checkbox pair.
///
/// Each handler forces the other box off, but unchecking the active box can
/// still leave both off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleToggles {
    pub client: bool,
    pub tutor: bool,
}

impl Default for RoleToggles {
    fn default() -> Self {
        Self { client: true, tutor: false }
    }
}

impl RoleToggles {
    /// The selected role, if exactly one box is checked.
    #[must_use]
    pub fn selected(self) -> Option<Role> {
        match (self.client, self.tutor) {
            (true, false) => Some(Role::Client),
            (false, true) => Some(Role::Tutor),
            _ => None,
        }
    }

    pub fn toggle_client(&mut self) {
        self.client = !self.client;
        self.tutor = false;
    }

    pub fn toggle_tutor(&mut self) {
        self.tutor = !self.tutor;
        self.client = false;
    }
}

/// Inline messages the form can show. Any combination may be visible at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormMessage {
    LoginFailed,
    RoleNotSelected,
    InvalidEmail,
    InvalidPassword,
}

impl FormMessage {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::LoginFailed => "Login Failed",
            Self::RoleNotSelected => "Please select either tutor or client",
            Self::InvalidEmail => "Please input a valid email!",
            Self::InvalidPassword => {
                "Password must contain at least one uppercase and number, and must be at least 8 characters long"
            }
        }
    }
}

/// What the caller should do after a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight; the event is dropped.
    Busy,
    /// Email or password failed validation. Inputs are kept for correction.
    Blocked(ValidationResult),
    /// No single role was selected. The form has already been reset.
    Skipped,
    /// Send this login request, then call [`LoginForm::settle`].
    Ready { role: Role, credentials: Credentials },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub roles: RoleToggles,
    pub email_valid: bool,
    pub password_valid: bool,
    pub can_submit: bool,
    pub error: bool,
    phase: Phase,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            roles: RoleToggles::default(),
            email_valid: true,
            password_valid: true,
            can_submit: false,
            error: false,
            phase: Phase::Idle,
        }
    }
}

impl LoginForm {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn role_selected(&self) -> bool {
        self.roles.selected().is_some()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.leave_settled();
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.leave_settled();
    }

    pub fn toggle_client(&mut self) {
        self.roles.toggle_client();
        self.leave_settled();
    }

    pub fn toggle_tutor(&mut self) {
        self.roles.toggle_tutor();
        self.leave_settled();
    }

    /// Validate the current inputs and decide whether to send a request.
    pub fn begin_submit(&mut self, validators: &Validators) -> Submission {
        if self.phase == Phase::Submitting {
            return Submission::Busy;
        }
        self.phase = Phase::Validating;

        let selected = self.roles.selected();
        let result = validators.validate(&self.email, &self.password, selected.is_some());
        self.email_valid = result.email_valid;
        self.password_valid = result.password_valid;
        self.can_submit = result.can_submit;

        let fields_ok =
            result.email_valid && result.password_valid && !self.email.is_empty() && !self.password.is_empty();
        if !fields_ok {
            self.phase = Phase::Idle;
            return Submission::Blocked(result);
        }

        let (true, Some(role)) = (result.can_submit, selected) else {
            self.reset();
            self.phase = Phase::Settled;
            return Submission::Skipped;
        };

        self.error = false;
        self.phase = Phase::Submitting;
        Submission::Ready {
            role,
            credentials: Credentials { email: self.email.clone(), password: self.password.clone() },
        }
    }

    /// Apply the result of the in-flight request and reset the inputs.
    ///
    /// Returns `false` (and changes nothing) when no request is in flight.
    pub fn settle<T>(&mut self, outcome: &Result<T, LoginError>) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        if outcome.is_err() {
            self.error = true;
        }
        self.reset();
        self.phase = Phase::Settled;
        true
    }

    /// Clear inputs, restore the Client-only selection, and reset validity.
    ///
    /// The login-failed flag survives so the message stays visible.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.roles = RoleToggles::default();
        self.email_valid = true;
        self.password_valid = true;
        self.can_submit = false;
    }

    /// Messages to render, in display order.
    #[must_use]
    pub fn visible_messages(&self) -> Vec<FormMessage> {
        [
            (self.error, FormMessage::LoginFailed),
            (!self.role_selected(), FormMessage::RoleNotSelected),
            (!self.email_valid, FormMessage::InvalidEmail),
            (!self.password_valid, FormMessage::InvalidPassword),
        ]
        .into_iter()
        .filter_map(|(shown, message)| shown.then_some(message))
        .collect()
    }

    fn leave_settled(&mut self) {
        if self.phase == Phase::Settled {
            self.phase = Phase::Idle;
        }
    }
}
