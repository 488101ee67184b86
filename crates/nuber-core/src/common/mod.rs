mod task;
mod timer;

pub use task::{TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use timer::{Deferred, TimerId, Timers};
