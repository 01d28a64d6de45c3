//! Outcome classification.
//!
//! # Data Flow
//! ```text
//! completed response, status ∈ {200, 201}
//!     → success.rs (content-type sniffing → Json / Text / Acknowledged)
//!
//! raised error
//!     → failure.rs (diagnostic re-fetch → ErrorDescriptor)
//! ```

pub mod failure;
pub mod success;

pub use failure::classify_failure;
pub use success::classify_success;
