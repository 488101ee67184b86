//! Effect handlers for the login runtime.
//!
//! Handlers are pure async functions that call a collaborator and return the
//! completion `LoginEvent`. The runtime spawns them and sends the result to
//! the inbox.

use std::sync::Arc;
use std::time::Duration;

use crate::common::{TaskId, TimerId};
use crate::events::LoginEvent;
use crate::phone::ValidatedPhone;
use crate::services::{FederatedConnectRequest, LoginServices};

pub async fn phone_sign_in(
    services: Arc<dyn LoginServices>,
    task: TaskId,
    phone: ValidatedPhone,
) -> LoginEvent {
    let result = services.request_phone_sign_in(phone.clone()).await;
    LoginEvent::PhoneSignInCompleted {
        task,
        phone,
        result,
    }
}

pub async fn connect_federated(
    services: Arc<dyn LoginServices>,
    task: TaskId,
    request: FederatedConnectRequest,
) -> LoginEvent {
    let result = services.connect_federated(request).await;
    LoginEvent::FederatedConnectCompleted { task, result }
}

pub async fn log_user_in(services: Arc<dyn LoginServices>, task: TaskId, token: String) -> LoginEvent {
    let result = services.log_user_in(token).await;
    LoginEvent::SessionEstablished { task, result }
}

pub async fn timer(timer: TimerId, after: Duration) -> LoginEvent {
    tokio::time::sleep(after).await;
    LoginEvent::TimerFired(timer)
}
