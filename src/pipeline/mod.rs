//! Request execution pipeline.

pub mod executor;

pub use executor::FetchExecutor;
