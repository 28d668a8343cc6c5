use log::debug;
use thiserror::Error;

use crate::core::errors::SandboxError;
use crate::core::ports::{CheckFailure, PortValidator};
use crate::core::sandbox::LaunchedComponent;

/// Why a test case did not pass
#[derive(Error, Debug)]
pub enum CaseError {
    /// An assertion did not hold
    #[error(transparent)]
    Failure(#[from] CheckFailure),
    /// The component raised while being exercised
    #[error(transparent)]
    Sandbox(#[from] SandboxError),
}

/// A test executed against a freshly launched component
pub trait ComponentCase {
    fn name(&self) -> &str;

    fn run(&self, component: &mut dyn LaunchedComponent) -> Result<(), CaseError>;
}

/// Start and stop can be called without raising
pub struct BasicBehavior;

impl ComponentCase for BasicBehavior {
    fn name(&self) -> &str {
        "basic_behavior"
    }

    fn run(&self, component: &mut dyn LaunchedComponent) -> Result<(), CaseError> {
        component.start()?;
        component.stop()?;
        Ok(())
    }
}

/// Every runtime port matches its declaration in the component descriptor
pub struct GetPortSet;

impl ComponentCase for GetPortSet {
    fn name(&self) -> &str {
        "get_port_set"
    }

    fn run(&self, component: &mut dyn LaunchedComponent) -> Result<(), CaseError> {
        let ports = component.port_set()?;
        for port in &ports {
            let definition = PortValidator::validate_port(port, component.descriptor())?;
            debug!(
                "{}: port '{}' matches {} {}",
                component.id(),
                port.name,
                definition.direction,
                definition.repid
            );
        }
        Ok(())
    }
}

/// The cases every component is checked with
pub fn default_cases() -> Vec<Box<dyn ComponentCase>> {
    vec![Box::new(BasicBehavior), Box::new(GetPortSet)]
}
