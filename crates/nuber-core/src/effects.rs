//! Login effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks directly.

use std::time::Duration;

use crate::common::{TaskId, TimerId};
use crate::phone::ValidatedPhone;
use crate::services::{FederatedConnectRequest, NavigationContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    NotifySuccess { message: String },

    NotifyError { message: String },

    Navigate {
        path: String,
        context: Option<NavigationContext>,
    },

    FocusPhoneInput,

    BlurPhoneInput,

    /// Spawn the SMS sign-in request.
    RequestPhoneSignIn { task: TaskId, phone: ValidatedPhone },

    /// Spawn the account-link request.
    ConnectFederated {
        task: TaskId,
        request: FederatedConnectRequest,
    },

    /// Spawn the session-establishment request.
    LogUserIn { task: TaskId, token: String },

    /// Feed `LoginEvent::TimerFired(timer)` back after `after`.
    Schedule { timer: TimerId, after: Duration },

    /// Abort the sleep for `timer`.
    CancelTimer { timer: TimerId },
}

impl LoginEffect {
    pub(crate) fn notify_success(message: impl Into<String>) -> Self {
        LoginEffect::NotifySuccess {
            message: message.into(),
        }
    }

    pub(crate) fn notify_error(message: impl Into<String>) -> Self {
        LoginEffect::NotifyError {
            message: message.into(),
        }
    }
}
