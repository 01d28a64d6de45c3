//! Single-request execution pipeline.
//!
//! Wraps one network call with an artificial pre-call delay, a hard
//! timeout that cancels the in-flight call, content-type–driven success
//! decoding, and a secondary diagnostic pass that classifies error
//! bodies into human-readable messages.
//!
//! # Architecture Overview
//!
//! ```text
//!            ┌──────────────────────────────────────────────────────┐
//!            │                   FETCH PIPELINE                      │
//!            │                                                       │
//!  execute() │  ┌────────┐   ┌───────────┐   ┌───────────────────┐  │
//!  ──────────┼─▶│ timing │──▶│ transport │──▶│ classify::success │  │
//!            │  │ delay+ │   │ (reqwest) │   └───────────────────┘  │
//!            │  │ abort  │   └─────┬─────┘   ┌───────────────────┐  │
//!            │  └────────┘         └────────▶│ classify::failure │  │
//!            │                    on error   │ (diagnostic fetch)│  │
//!            │                               └───────────────────┘  │
//!            │  ┌────────────────────────────────────────────────┐  │
//!            │  │ state: LifecycleState → FetchObserver           │  │
//!            │  └────────────────────────────────────────────────┘  │
//!            └──────────────────────────────────────────────────────┘
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod timing;
pub mod transport;

pub use config::{CallPolicy, RequestConfig, RequestOptions};
pub use error::{FetchError, FetchResult};
pub use pipeline::FetchExecutor;
pub use state::{ErrorDescriptor, FetchObserver, LifecycleState, Payload, StateSnapshot};
pub use transport::{HttpTransport, RawResponse, Transport};
