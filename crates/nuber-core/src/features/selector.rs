//! Login method selection.
//!
//! `Unselected` may move to `Mobile` or `Social`; only back returns to
//! `Unselected`. Mobile and social never switch directly.

use tracing::debug;

use crate::common::Deferred;
use crate::config::TimingConfig;
use crate::effects::LoginEffect;
use crate::state::{LoginMethod, LoginSession};

pub fn select_mobile(session: &mut LoginSession, timing: &TimingConfig) -> Vec<LoginEffect> {
    if session.login_method.is_selected() {
        debug!(method = ?session.login_method, "select mobile ignored");
        return vec![];
    }
    session.login_method = LoginMethod::Mobile;
    let timer = session.timers.schedule(Deferred::FocusPhoneInput);
    vec![LoginEffect::Schedule {
        timer,
        after: timing.focus_delay(),
    }]
}

pub fn select_social(session: &mut LoginSession) -> Vec<LoginEffect> {
    if session.login_method.is_selected() {
        debug!(method = ?session.login_method, "select social ignored");
        return vec![];
    }
    session.login_method = LoginMethod::Social;
    vec![]
}

/// Blurs the input now and collapses after the configured delay.
pub fn go_back(session: &mut LoginSession, timing: &TimingConfig) -> Vec<LoginEffect> {
    if !session.login_method.can_go_back() {
        return vec![];
    }
    if session.timers.is_pending(&Deferred::CollapseToUnselected) {
        debug!("collapse already scheduled");
        return vec![];
    }

    let mut effects: Vec<LoginEffect> = session
        .timers
        .cancel(&Deferred::FocusPhoneInput)
        .into_iter()
        .map(|timer| LoginEffect::CancelTimer { timer })
        .collect();
    effects.push(LoginEffect::BlurPhoneInput);
    let timer = session.timers.schedule(Deferred::CollapseToUnselected);
    effects.push(LoginEffect::Schedule {
        timer,
        after: timing.collapse_delay(),
    });
    effects
}

/// Focus only lands if the mobile form is still open.
pub fn on_focus_due(session: &LoginSession) -> Vec<LoginEffect> {
    if session.login_method == LoginMethod::Mobile {
        vec![LoginEffect::FocusPhoneInput]
    } else {
        vec![]
    }
}

pub fn on_collapse_due(session: &mut LoginSession) -> Vec<LoginEffect> {
    session.login_method = LoginMethod::Unselected;
    vec![]
}
