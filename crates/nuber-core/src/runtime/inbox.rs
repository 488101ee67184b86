//! Inbox channel types.
//!
//! Spawned requests and timers send their results here; the runtime drains
//! it and feeds each event through the reducer.

use tokio::sync::mpsc;

use crate::events::LoginEvent;

pub type LoginEventSender = mpsc::UnboundedSender<LoginEvent>;
pub type LoginEventReceiver = mpsc::UnboundedReceiver<LoginEvent>;

pub fn channel() -> (LoginEventSender, LoginEventReceiver) {
    mpsc::unbounded_channel()
}
