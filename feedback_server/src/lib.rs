pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{Failure, FailureKind, FieldViolations};
pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::routes::{app, with_failure_translation};
