//! Process scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the immutable
//! job input, the per-run simulation record, and the two outputs (the Gantt
//! timeline and the per-job completion metrics).
//!
//! # Lifecycle
//!
//! | Type | Created by | Lifetime |
//! |------|-----------|----------|
//! | `Job` | caller | input, never mutated |
//! | `SimRecord` | policy engine | one simulation run |
//! | `Timeline` / `Interval` | policy engine | returned as result |
//! | `CompletionRecord` | policy engine | returned as result |

mod completion;
mod job;
mod timeline;

pub use completion::CompletionRecord;
pub use job::{Job, SimRecord};
pub use timeline::{Interval, Timeline};
