//! Federated (social) login.
//!
//! Two chained requests: link the provider account, then establish a
//! session with the token the link returned. A cancelled provider flow is
//! silently ignored. Failure of either step shows the same message.

use tracing::{debug, info, warn};

use crate::common::TaskId;
use crate::effects::LoginEffect;
use crate::error::RequestResult;
use crate::profile::FederatedProfile;
use crate::services::FederatedConnectResponse;
use crate::state::LoginSession;

pub const FACEBOOK_FAILED: &str = "Couldn't log in with Facebook, try again";

pub fn handle_provider_response(
    session: &mut LoginSession,
    profile: &FederatedProfile,
) -> Vec<LoginEffect> {
    let Some(request) = profile.connect_request() else {
        debug!("provider flow cancelled");
        return vec![];
    };
    if session.tasks.federated_connect.is_running() {
        debug!("account link already in flight, provider response ignored");
        return vec![];
    }

    let task = session.task_seq.next_id();
    session.tasks.federated_connect.start(task);
    info!(task = task.0, has_email = request.email.is_some(), "linking federated account");
    vec![LoginEffect::ConnectFederated { task, request }]
}

pub fn on_connect_completed(
    session: &mut LoginSession,
    task: TaskId,
    result: RequestResult<FederatedConnectResponse>,
) -> Vec<LoginEffect> {
    if !session.tasks.federated_connect.finish_if_active(task) {
        debug!(task = task.0, "stale account link completion dropped");
        return vec![];
    }

    match result {
        Ok(FederatedConnectResponse {
            ok: true,
            token: Some(token),
            ..
        }) if !token.is_empty() => {
            let task = session.task_seq.next_id();
            session.tasks.session_establish.start(task);
            info!(task = task.0, "account linked, establishing session");
            vec![LoginEffect::LogUserIn { task, token }]
        }
        Ok(response) => {
            warn!(
                task = task.0,
                ok = response.ok,
                error = response.error.as_deref().unwrap_or(""),
                "account link refused"
            );
            vec![LoginEffect::notify_error(FACEBOOK_FAILED)]
        }
        Err(err) => {
            warn!(task = task.0, kind = %err.kind, error = %err, "account link failed");
            vec![LoginEffect::notify_error(FACEBOOK_FAILED)]
        }
    }
}

pub fn on_session_established(
    session: &mut LoginSession,
    task: TaskId,
    result: RequestResult<()>,
) -> Vec<LoginEffect> {
    if !session.tasks.session_establish.finish_if_active(task) {
        debug!(task = task.0, "stale session completion dropped");
        return vec![];
    }

    match result {
        Ok(()) => {
            if session.session_established {
                warn!("session established more than once");
            }
            session.session_established = true;
            info!(task = task.0, "session established");
            vec![]
        }
        Err(err) => {
            warn!(task = task.0, kind = %err.kind, error = %err, "session establishment failed");
            vec![LoginEffect::notify_error(FACEBOOK_FAILED)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;

    fn profile() -> FederatedProfile {
        FederatedProfile {
            access_token: Some("EAAB".into()),
            email: None,
            first_name: "Min".into(),
            last_name: "Kim".into(),
            provider_user_id: "10150".into(),
        }
    }

    fn linking(s: &mut LoginSession) -> TaskId {
        match handle_provider_response(s, &profile()).pop() {
            Some(LoginEffect::ConnectFederated { task, request }) => {
                assert_eq!(request.email, None);
                assert_eq!(request.provider_user_id, "10150");
                task
            }
            other => panic!("expected link request, got {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_profile_has_no_effects() {
        let mut s = LoginSession::new("+82");
        let effects = handle_provider_response(&mut s, &FederatedProfile::default());
        assert!(effects.is_empty());
        assert!(s.is_idle());
        assert_eq!(s.task_seq.issued(), 0);
    }

    #[test]
    fn test_link_success_chains_session_request() {
        let mut s = LoginSession::new("+82");
        let task = linking(&mut s);
        let response = FederatedConnectResponse {
            ok: true,
            token: Some("jwt".into()),
            error: None,
        };

        let effects = on_connect_completed(&mut s, task, Ok(response));

        assert!(matches!(
            effects.as_slice(),
            [LoginEffect::LogUserIn { token, .. }] if token == "jwt"
        ));
        assert!(s.tasks.session_establish.is_running());
        assert!(!s.tasks.federated_connect.is_running());
    }

    #[test]
    fn test_link_refused_notifies_once_without_session_call() {
        let mut s = LoginSession::new("+82");
        let task = linking(&mut s);
        let response = FederatedConnectResponse {
            ok: false,
            token: None,
            error: Some("no such user".into()),
        };

        let effects = on_connect_completed(&mut s, task, Ok(response));

        assert_eq!(effects, vec![LoginEffect::notify_error(FACEBOOK_FAILED)]);
        assert!(!s.tasks.session_establish.is_running());
    }

    #[test]
    fn test_ok_without_token_is_a_failure() {
        let mut s = LoginSession::new("+82");
        let task = linking(&mut s);
        let response = FederatedConnectResponse {
            ok: true,
            token: None,
            error: None,
        };
        let effects = on_connect_completed(&mut s, task, Ok(response));
        assert_eq!(effects, vec![LoginEffect::notify_error(FACEBOOK_FAILED)]);
    }

    #[test]
    fn test_link_transport_failure_notifies() {
        let mut s = LoginSession::new("+82");
        let task = linking(&mut s);
        let effects = on_connect_completed(&mut s, task, Err(RequestError::transport("HTTP 502")));
        assert_eq!(effects, vec![LoginEffect::notify_error(FACEBOOK_FAILED)]);
    }

    #[test]
    fn test_second_callback_while_linking_is_ignored() {
        let mut s = LoginSession::new("+82");
        linking(&mut s);
        assert!(handle_provider_response(&mut s, &profile()).is_empty());
    }

    #[test]
    fn test_session_failure_is_surfaced() {
        let mut s = LoginSession::new("+82");
        let task = s.task_seq.next_id();
        s.tasks.session_establish.start(task);
        let effects =
            on_session_established(&mut s, task, Err(RequestError::session_establish("closed")));
        assert_eq!(effects, vec![LoginEffect::notify_error(FACEBOOK_FAILED)]);
        assert!(!s.session_established);
    }

    #[test]
    fn test_session_success_marks_established() {
        let mut s = LoginSession::new("+82");
        let task = s.task_seq.next_id();
        s.tasks.session_establish.start(task);
        assert!(on_session_established(&mut s, task, Ok(())).is_empty());
        assert!(s.session_established);
        assert!(s.is_idle());
    }
}
