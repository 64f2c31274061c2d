//! Scroll-driven view activation and animation sequencing.
//!
//! Everything here is plain state plus the [`Scheduler`] seam, so it runs the
//! same under the browser's event loop and under [`ManualScheduler`] in tests.

mod counter;
mod particles;
mod reveal;
mod schedule;
mod scroll;
mod typing;
mod viewport;

pub use counter::{format_stat, ProgressFill, StatCounter, COUNTER_DURATION, PROGRESS_DELAY};
pub use particles::{generate_with_rng, Particle, PARTICLE_COUNT};
pub use reveal::{DirectionRule, RevealScheduler, RevealStyle, StaggerProfile};
pub use schedule::{
    drive, drive_after, Animation, BrowserScheduler, ManualScheduler, Scheduler, Step, Task,
};
pub use scroll::{
    anchor_target, classify, ScrollFrame, SectionDescriptor, HEADER_OFFSET, SCROLL_THROTTLE_MS,
};
pub use typing::TypingEffect;
pub use viewport::{
    intersection_ratio, Activation, Rect, TargetId, TargetKind, ViewportTracker, ROOT_MARGIN,
    VISIBILITY_THRESHOLD,
};
