//! Standard visitor wrappers.

pub mod logging;
pub mod tracing;

pub use self::logging::LoggingVisitor;
pub use self::tracing::TracingVisitor;
