//! Error chain nodes
//!
//! Provides the chain node of the library:
//! - Message, classification code, stack snapshot and wrapped cause
//! - Constructors that preserve the absence of a cause
//! - Capability implementations used by the chain walkers
//! - Display and JSON rendering of the whole chain

pub mod capabilities;
pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
pub mod types;

// Re-export all public types and traits
pub use constructors::{join_text, TEXT_SEPARATOR};
pub use logging::LoggingTransformer;
pub use types::{Error, Result};
