// Domain layer: failure taxonomy, field violations, and ports.

pub mod errors;
pub mod ports;
pub mod violations;

// Re-export the domain boundary types and ports.
pub use errors::{Failure, FailureKind};
pub use ports::Clock;
pub use violations::{FieldViolation, FieldViolations};
