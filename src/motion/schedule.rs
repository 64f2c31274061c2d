use std::{
    cell::RefCell,
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    rc::Rc,
    time::Duration,
};

pub type Task = Box<dyn FnOnce() + 'static>;

/// The one timer seam every time-driven behavior goes through.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Schedules onto the host event loop via `setTimeout`.
///
/// Outside the browser (server rendering) tasks are dropped: the server only
/// ever renders the initial frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(feature = "hydrate")]
        leptos::prelude::set_timeout(task, delay);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
    }
}

/// Virtual-time scheduler. Nothing runs until [`ManualScheduler::advance`]
/// moves the clock; due tasks then run in `(due time, insertion order)`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.timeline.borrow().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due on
    /// the way, including tasks scheduled by those tasks.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut timeline = self.timeline.borrow_mut();
                let due = timeline.queue.peek().map(|Reverse(p)| p.due);
                match due {
                    Some(due) if due <= target => {
                        timeline.now = due;
                        timeline.queue.pop().map(|Reverse(p)| p.task)
                    }
                    _ => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.timeline.borrow_mut().now = target;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + delay;
        let seq = timeline.seq;
        timeline.seq += 1;
        timeline.queue.push(Reverse(Pending { due, seq, task }));
    }
}

/// One rendered frame plus the delay before the next tick. `next: None`
/// means the animation has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<F> {
    pub frame: F,
    pub next: Option<Duration>,
}

/// A self-rescheduling animation expressed as a state machine.
pub trait Animation {
    type Frame;

    fn tick(&mut self) -> Step<Self::Frame>;
}

/// Ticks `animation` now, hands the frame to `render`, and keeps
/// rescheduling itself until the animation reports it is done.
pub fn drive<S, A, R>(scheduler: S, mut animation: A, mut render: R)
where
    S: Scheduler + Clone + 'static,
    A: Animation + 'static,
    R: FnMut(A::Frame) + 'static,
{
    let Step { frame, next } = animation.tick();
    render(frame);
    if let Some(delay) = next {
        let handle = scheduler.clone();
        scheduler.schedule(
            delay,
            Box::new(move || drive(handle, animation, render)),
        );
    }
}

/// Like [`drive`], but the first tick happens after `lead_in`.
pub fn drive_after<S, A, R>(scheduler: S, lead_in: Duration, animation: A, render: R)
where
    S: Scheduler + Clone + 'static,
    A: Animation + 'static,
    R: FnMut(A::Frame) + 'static,
{
    let handle = scheduler.clone();
    scheduler.schedule(
        lead_in,
        Box::new(move || drive(handle, animation, render)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = log.clone();
        let push = move |label: &'static str| -> Task {
            let log = handle.clone();
            Box::new(move || log.borrow_mut().push(label))
        };
        (log, push)
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, push) = recorder();

        scheduler.schedule(Duration::from_millis(300), push("c"));
        scheduler.schedule(Duration::from_millis(100), push("a"));
        scheduler.schedule(Duration::from_millis(200), push("b"));

        scheduler.advance_ms(150);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(scheduler.pending(), 2);

        scheduler.advance_ms(1000);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), Duration::from_millis(1150));
    }

    #[test]
    fn test_same_due_time_keeps_insertion_order() {
        let scheduler = ManualScheduler::new();
        let (log, push) = recorder();

        scheduler.schedule(Duration::ZERO, push("first"));
        scheduler.schedule(Duration::ZERO, push("second"));
        scheduler.advance(Duration::ZERO);

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_nested_tasks_fire_within_same_advance() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(RefCell::new(Vec::new()));

        let inner_sched = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.borrow_mut().push(inner_sched.now());
                let hits = inner_hits.clone();
                let clock = inner_sched.clone();
                inner_sched.schedule(
                    Duration::from_millis(10),
                    Box::new(move || hits.borrow_mut().push(clock.now())),
                );
            }),
        );

        scheduler.advance_ms(25);
        assert_eq!(
            *hits.borrow(),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
    }

    struct Countdown(u32);

    impl Animation for Countdown {
        type Frame = u32;

        fn tick(&mut self) -> Step<u32> {
            self.0 -= 1;
            Step {
                frame: self.0,
                next: (self.0 > 0).then_some(Duration::from_millis(50)),
            }
        }
    }

    #[test]
    fn test_drive_stops_when_animation_finishes() {
        let scheduler = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();

        drive(scheduler.clone(), Countdown(3), move |f| sink.borrow_mut().push(f));
        assert_eq!(*frames.borrow(), vec![2]);

        scheduler.advance_ms(1000);
        assert_eq!(*frames.borrow(), vec![2, 1, 0]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drive_after_waits_for_lead_in() {
        let scheduler = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();

        drive_after(
            scheduler.clone(),
            Duration::from_millis(40),
            Countdown(1),
            move |f| sink.borrow_mut().push(f),
        );
        scheduler.advance_ms(39);
        assert!(frames.borrow().is_empty());
        scheduler.advance_ms(1);
        assert_eq!(*frames.borrow(), vec![0]);
    }
}
