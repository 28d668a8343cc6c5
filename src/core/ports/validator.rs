use thiserror::Error;

use super::definition::{find_port_definition, PortDefinition};
use crate::core::descriptor::SoftwareComponent;
use crate::core::sandbox::PortHandle;

/// An assertion about a runtime port that did not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("Port '{port}' has no object reference")]
    NullObjectReference { port: String },

    #[error("Port '{port}' is not declared in the component descriptor")]
    MissingDefinition { port: String },

    #[error("Port '{port}' {field} mismatch: expected '{expected}', got '{actual}'")]
    FieldMismatch {
        port: String,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// Checks runtime port handles against the component descriptor
pub struct PortValidator;

impl PortValidator {
    /// Validate that the port is backed by a live object
    pub fn validate_object_reference(port: &PortHandle) -> Result<(), CheckFailure> {
        match port.object {
            Some(_) => Ok(()),
            None => Err(CheckFailure::NullObjectReference {
                port: port.name.clone(),
            }),
        }
    }

    /// Validate one port against its declaration, returning the definition it matched
    pub fn validate_port(
        port: &PortHandle,
        scd: &SoftwareComponent,
    ) -> Result<PortDefinition, CheckFailure> {
        Self::validate_object_reference(port)?;

        let definition = find_port_definition(&port.name, scd).ok_or_else(|| {
            CheckFailure::MissingDefinition {
                port: port.name.clone(),
            }
        })?;

        Self::compare(&port.name, "repid", &definition.repid, &port.repid)?;
        Self::compare(
            &port.name,
            "description",
            definition.expected_description(),
            &port.description,
        )?;
        Self::compare(
            &port.name,
            "direction",
            definition.direction.as_str(),
            port.direction.as_str(),
        )?;

        Ok(definition)
    }

    /// Validate every port, stopping at the first failure
    pub fn validate_port_set(
        ports: &[PortHandle],
        scd: &SoftwareComponent,
    ) -> Result<usize, CheckFailure> {
        for port in ports {
            Self::validate_port(port, scd)?;
        }
        Ok(ports.len())
    }

    fn compare(
        port: &str,
        field: &'static str,
        expected: &str,
        actual: &str,
    ) -> Result<(), CheckFailure> {
        if expected == actual {
            return Ok(());
        }
        Err(CheckFailure::FieldMismatch {
            port: port.to_string(),
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
