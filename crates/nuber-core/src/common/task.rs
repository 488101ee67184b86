//! Request lifecycle bookkeeping.
//!
//! Each service request gets a `TaskId`. Completions carry the id back so a
//! stale reply (for a request the session no longer waits on) is dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    PhoneSignIn,
    FederatedConnect,
    SessionEstablish,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::PhoneSignIn,
        TaskKind::FederatedConnect,
        TaskKind::SessionEstablish,
    ];
}

/// Lifecycle of one kind of request (mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub phone_sign_in: TaskState,
    pub federated_connect: TaskState,
    pub session_establish: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::PhoneSignIn => &self.phone_sign_in,
            TaskKind::FederatedConnect => &self.federated_connect,
            TaskKind::SessionEstablish => &self.session_establish,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::PhoneSignIn => &mut self.phone_sign_in,
            TaskKind::FederatedConnect => &mut self.federated_connect,
            TaskKind::SessionEstablish => &mut self.session_establish,
        }
    }

    pub fn is_any_running(&self) -> bool {
        TaskKind::ALL.into_iter().any(|kind| self.state(kind).is_running())
    }

    /// Forgets every in-flight request; late completions become stale.
    pub fn clear_all(&mut self) {
        for kind in TaskKind::ALL {
            self.state_mut(kind).clear();
        }
    }
}
