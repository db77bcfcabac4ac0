//! Scheduling domain models.
//!
//! Provides the data types shared by every policy: the process being
//! scheduled and the schedule of execution segments a run produces.
//!
//! # Lifecycle
//!
//! | Type | Created by | Lives for |
//! |------|-----------|-----------|
//! | Process | Caller, via the registry | Until removed |
//! | Segment | Policy run | One run |
//! | Schedule | Policy run | One run |

mod process;
mod schedule;

pub use process::{Process, DEFAULT_PRIORITY};
pub use schedule::{Schedule, Segment};
