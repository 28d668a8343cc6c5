pub mod cases;
pub mod config;
pub mod fixture;
pub mod runner;

pub use cases::{default_cases, BasicBehavior, CaseError, ComponentCase, GetPortSet};
pub use config::{HarnessConfig, ImplementationSelection};
pub use fixture::Fixture;
pub use runner::{CaseOutcome, CaseResult, HarnessRunner, RunReport};
