//! Login reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(session, config, event)`
//! and executes the returned effects.

use tracing::debug;

use crate::common::Deferred;
use crate::config::Config;
use crate::effects::LoginEffect;
use crate::events::LoginEvent;
use crate::features::{federated, phone_sign_in, selector};
use crate::state::LoginSession;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(session: &mut LoginSession, config: &Config, event: LoginEvent) -> Vec<LoginEffect> {
    match event {
        LoginEvent::SelectMobile => selector::select_mobile(session, &config.timing),
        LoginEvent::SelectSocial => selector::select_social(session),
        LoginEvent::GoBack => selector::go_back(session, &config.timing),
        LoginEvent::Field(field) => {
            session.apply(field);
            vec![]
        }
        LoginEvent::Submit => phone_sign_in::submit(session),
        LoginEvent::ProviderResponse(profile) => {
            federated::handle_provider_response(session, &profile)
        }
        LoginEvent::PhoneSignInCompleted {
            task,
            phone,
            result,
        } => phone_sign_in::on_completed(session, config, task, phone, result),
        LoginEvent::FederatedConnectCompleted { task, result } => {
            federated::on_connect_completed(session, task, result)
        }
        LoginEvent::SessionEstablished { task, result } => {
            federated::on_session_established(session, task, result)
        }
        LoginEvent::TimerFired(timer) => {
            let Some(action) = session.timers.take(timer) else {
                debug!(timer = timer.0, "cancelled timer fired, ignored");
                return vec![];
            };
            debug!(timer = timer.0, ?action, "timer fired");
            match action {
                Deferred::FocusPhoneInput => selector::on_focus_due(session),
                Deferred::CollapseToUnselected => selector::on_collapse_due(session),
                Deferred::NavigateToVerify { phone } => {
                    phone_sign_in::on_redirect_due(config, phone)
                }
            }
        }
    }
}

/// Cancels every deferred action the session still owns.
///
/// Called when the screen goes away; nothing scheduled may fire afterwards.
pub fn teardown(session: &mut LoginSession) -> Vec<LoginEffect> {
    session.tasks.clear_all();
    session
        .timers
        .drain()
        .into_iter()
        .map(|timer| LoginEffect::CancelTimer { timer })
        .collect()
}
