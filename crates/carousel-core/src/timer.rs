//! Cooperative timers driven by frame time.
//!
//! A [`TimerQueue`] never runs code on its own. The owner asks it for the
//! signals that are due at the current frame time and handles them on the
//! same thread, so a timer can never race with input handling. Every
//! scheduled task hands back a [`TaskHandle`] that works as a cancellation
//! token; the queue drops cancelled tasks the next time it is drained.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use smallvec::SmallVec;

/// Shortest interval a repeating task may use.
const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

/// Stable identity of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Cancellation token for a scheduled task.
///
/// Dropping the handle does not cancel the task; owners call
/// [`TaskHandle::cancel`] explicitly, typically on teardown.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    id: TaskId,
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug)]
struct ScheduledTask<S> {
    id: TaskId,
    deadline: Duration,
    repeat: Repeat,
    signal: S,
    cancelled: Rc<Cell<bool>>,
}

/// Queue of one-shot and repeating timers that yield signals of type `S`.
#[derive(Debug)]
pub struct TimerQueue<S> {
    tasks: Vec<ScheduledTask<S>>,
    next_id: u64,
}

impl<S> Default for TimerQueue<S> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<S: Clone> TimerQueue<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `signal` to be delivered once, `delay` after `now`.
    pub fn schedule_once(&mut self, now: Duration, delay: Duration, signal: S) -> TaskHandle {
        self.push(now + delay, Repeat::Once, signal)
    }

    /// Schedules `signal` every `interval`, starting one interval after `now`.
    pub fn schedule_repeating(
        &mut self,
        now: Duration,
        interval: Duration,
        signal: S,
    ) -> TaskHandle {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        self.push(now + interval, Repeat::Every(interval), signal)
    }

    fn push(&mut self, deadline: Duration, repeat: Repeat, signal: S) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.push(ScheduledTask {
            id,
            deadline,
            repeat,
            signal,
            cancelled: cancelled.clone(),
        });
        TaskHandle { id, cancelled }
    }

    /// Removes and returns every signal due at `now`, ordered by deadline.
    ///
    /// A repeating task that is more than one interval behind fires once and
    /// is re-armed relative to `now`, so a stalled host does not receive a
    /// burst of catch-up signals.
    pub fn drain_due(&mut self, now: Duration) -> SmallVec<[S; 4]> {
        self.tasks.retain(|task| !task.cancelled.get());

        let mut due: SmallVec<[(Duration, TaskId, S); 4]> = SmallVec::new();
        self.tasks.retain_mut(|task| {
            if task.deadline > now {
                return true;
            }
            due.push((task.deadline, task.id, task.signal.clone()));
            match task.repeat {
                Repeat::Once => false,
                Repeat::Every(interval) => {
                    let mut next = task.deadline + interval;
                    if next <= now {
                        log::trace!("timer {:?} fell behind, re-arming from {:?}", task.id, now);
                        next = now + interval;
                    }
                    task.deadline = next;
                    true
                }
            }
        });

        due.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        due.into_iter().map(|(_, _, signal)| signal).collect()
    }

    /// Earliest pending deadline, if any task is still live.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|task| !task.cancelled.get())
            .map(|task| task.deadline)
            .min()
    }

    /// Cancels every pending task.
    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.cancelled.set(true);
        }
    }

    /// Number of live (not cancelled) tasks.
    pub fn len(&self) -> usize {
        self.tasks.iter().filter(|task| !task.cancelled.get()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
