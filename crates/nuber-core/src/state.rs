//! Login screen state.
//!
//! One `LoginSession` exists per mounted login screen and is dropped with it.
//! Only the reducer mutates it.

use tracing::debug;

use crate::common::{TaskSeq, Tasks, Timers};

/// Which sign-in surface the user committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Unselected,
    Mobile,
    Social,
}

impl LoginMethod {
    pub fn is_selected(self) -> bool {
        self != LoginMethod::Unselected
    }

    /// The back affordance is shown for any committed method.
    pub fn can_go_back(self) -> bool {
        self.is_selected()
    }
}

/// Write to one of the phone form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    SetCountryCode(String),
    SetPhoneNumber(String),
}

#[derive(Debug)]
pub struct LoginSession {
    pub login_method: LoginMethod,
    /// Dial code token such as `+82`.
    pub country_code: String,
    /// Digits as typed; validated only on submit.
    pub phone_number: String,
    /// Set once the session-establishment service accepted a token.
    pub session_established: bool,

    pub tasks: Tasks,
    pub task_seq: TaskSeq,
    pub timers: Timers,
}

impl LoginSession {
    pub fn new(default_country_code: impl Into<String>) -> Self {
        Self {
            login_method: LoginMethod::Unselected,
            country_code: default_country_code.into(),
            phone_number: String::new(),
            session_established: false,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
            timers: Timers::default(),
        }
    }

    /// True while an SMS sign-in request is in flight.
    pub fn pending(&self) -> bool {
        self.tasks.phone_sign_in.is_running()
    }

    /// Nothing in flight and nothing scheduled.
    pub fn is_idle(&self) -> bool {
        !self.tasks.is_any_running() && self.timers.is_empty()
    }

    /// Applies a form field write. Ignored unless the mobile form is active.
    pub fn apply(&mut self, update: FieldUpdate) {
        if self.login_method != LoginMethod::Mobile {
            debug!(method = ?self.login_method, "field update ignored outside mobile login");
            return;
        }
        match update {
            FieldUpdate::SetCountryCode(value) => self.country_code = value,
            FieldUpdate::SetPhoneNumber(value) => self.phone_number = value,
        }
    }
}
