//! Request configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file or CLI flags
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RequestConfig (validated, immutable for one execution)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so minimal configs work
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is immutable once an execution starts

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::CallPolicy;
pub use schema::RequestConfig;
pub use schema::RequestOptions;
