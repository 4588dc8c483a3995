//! Process-wide setup shared by the binary.

pub mod tracing;

pub use self::tracing::*;
