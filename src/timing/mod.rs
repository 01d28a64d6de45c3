//! Timing primitives: the pre-dispatch delay gate and the abort timer.
//!
//! # Data Flow
//! ```text
//! execute() start:
//!     → abort.rs arms the timer for abort_timeout_ms
//!     → delay.rs suspends the main sequence for additional_call_time_ms
//!     → both run concurrently; the executor checks the fired signal at
//!       the post-delay checkpoint and races the dispatch against it
//! ```

pub mod abort;
pub mod delay;

pub use abort::AbortTimer;
pub use delay::await_delay;
