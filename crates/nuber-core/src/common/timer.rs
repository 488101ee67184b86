//! Deferred actions owned by a login session.
//!
//! The reducer schedules a [`Deferred`] under a fresh [`TimerId`]; the runtime
//! sleeps and feeds the id back. Only ids still registered here are acted on,
//! so cancelling is just forgetting the id (the runtime also aborts the sleep).

use std::collections::HashMap;

use crate::phone::ValidatedPhone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// What happens when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Move focus to the phone input once the expand transition has run.
    FocusPhoneInput,
    /// Return to `Unselected` once the input has let go of focus.
    CollapseToUnselected,
    /// Leave for the verification screen after the SMS confirmation was read.
    NavigateToVerify { phone: ValidatedPhone },
}

#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    pending: HashMap<TimerId, Deferred>,
}

impl Timers {
    pub fn schedule(&mut self, action: Deferred) -> TimerId {
        let id = TimerId(self.next);
        self.next = self.next.wrapping_add(1);
        self.pending.insert(id, action);
        id
    }

    /// Removes and returns the action for a fired timer.
    pub fn take(&mut self, id: TimerId) -> Option<Deferred> {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, action: &Deferred) -> bool {
        self.pending.values().any(|a| a == action)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forgets every pending timer for `action`, returning their ids.
    pub fn cancel(&mut self, action: &Deferred) -> Vec<TimerId> {
        let ids: Vec<TimerId> = self
            .pending
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.pending.remove(id);
        }
        ids
    }

    /// Forgets every pending timer, returning their ids.
    pub fn drain(&mut self) -> Vec<TimerId> {
        self.pending.drain().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_one_shot() {
        let mut timers = Timers::default();
        let id = timers.schedule(Deferred::FocusPhoneInput);
        assert!(timers.is_pending(&Deferred::FocusPhoneInput));
        assert_eq!(timers.take(id), Some(Deferred::FocusPhoneInput));
        assert_eq!(timers.take(id), None);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_only_matching() {
        let mut timers = Timers::default();
        let focus = timers.schedule(Deferred::FocusPhoneInput);
        let collapse = timers.schedule(Deferred::CollapseToUnselected);
        assert_eq!(timers.cancel(&Deferred::FocusPhoneInput), vec![focus]);
        assert!(!timers.is_pending(&Deferred::FocusPhoneInput));
        assert_eq!(timers.take(collapse), Some(Deferred::CollapseToUnselected));
    }

    #[test]
    fn test_drain_forgets_everything() {
        let mut timers = Timers::default();
        let a = timers.schedule(Deferred::FocusPhoneInput);
        let b = timers.schedule(Deferred::CollapseToUnselected);
        let mut drained = timers.drain();
        drained.sort_by_key(|id| id.0);
        assert_eq!(drained, vec![a, b]);
        assert!(timers.take(a).is_none());
    }
}
