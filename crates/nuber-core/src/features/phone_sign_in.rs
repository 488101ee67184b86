//! SMS sign-in orchestration.
//!
//! At most one request is in flight per session. On success the user gets
//! a confirmation toast and, after a deliberate wait, the verification
//! screen. The in-flight flag clears when the request settles, independent
//! of that wait.

use tracing::{debug, info, warn};

use crate::common::{Deferred, TaskId};
use crate::config::Config;
use crate::effects::LoginEffect;
use crate::error::RequestResult;
use crate::phone::{ValidatedPhone, validate};
use crate::services::{NavigationContext, PhoneSignInResponse};
use crate::state::{LoginMethod, LoginSession};

pub const SMS_SENT: &str = "SMS Sent.";
pub const INVALID_PHONE: &str = "Phone number is not valid";
/// Shown when the server reports failure without a message.
pub const SMS_FAILED: &str = "Couldn't send SMS, try again";

pub fn submit(session: &mut LoginSession) -> Vec<LoginEffect> {
    if session.login_method != LoginMethod::Mobile {
        debug!(method = ?session.login_method, "submit ignored outside mobile login");
        return vec![];
    }
    if session.pending() {
        debug!("phone sign-in already in flight, submit ignored");
        return vec![];
    }

    let phone = match validate(&session.country_code, &session.phone_number) {
        Ok(phone) => phone,
        Err(err) => {
            info!(code = err.code(), "phone number rejected");
            return vec![LoginEffect::notify_error(INVALID_PHONE)];
        }
    };

    let task = session.task_seq.next_id();
    session.tasks.phone_sign_in.start(task);
    info!(task = task.0, phone = %phone.redacted(), "requesting phone sign-in");
    vec![LoginEffect::RequestPhoneSignIn { task, phone }]
}

pub fn on_completed(
    session: &mut LoginSession,
    config: &Config,
    task: TaskId,
    phone: ValidatedPhone,
    result: RequestResult<PhoneSignInResponse>,
) -> Vec<LoginEffect> {
    if !session.tasks.phone_sign_in.finish_if_active(task) {
        debug!(task = task.0, "stale phone sign-in completion dropped");
        return vec![];
    }

    match result {
        Ok(response) if response.ok => {
            info!(task = task.0, "SMS sent");
            let after = config.timing.verify_redirect_delay();
            let timer = session.timers.schedule(Deferred::NavigateToVerify { phone });
            vec![
                LoginEffect::notify_success(SMS_SENT),
                LoginEffect::Schedule { timer, after },
            ]
        }
        Ok(response) => {
            let message = response
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| SMS_FAILED.to_string());
            warn!(task = task.0, error = %message, "phone sign-in refused");
            vec![LoginEffect::notify_error(message)]
        }
        Err(err) => {
            warn!(task = task.0, kind = %err.kind, error = %err, "phone sign-in failed");
            let message = if err.message.is_empty() {
                SMS_FAILED.to_string()
            } else {
                err.message
            };
            vec![LoginEffect::notify_error(message)]
        }
    }
}

pub fn on_redirect_due(config: &Config, phone: ValidatedPhone) -> Vec<LoginEffect> {
    vec![LoginEffect::Navigate {
        path: config.verify_path.clone(),
        context: Some(NavigationContext { phone }),
    }]
}
