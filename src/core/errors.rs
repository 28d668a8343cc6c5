//! Error types shared by the descriptor, sandbox and harness layers.

use std::path::PathBuf;

use thiserror::Error;

use super::types::ComponentId;

/// Errors raised while reading SPD/SCD descriptor files.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The descriptor file could not be read.
    #[error("Failed to read descriptor {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not well-formed or does not match the expected shape.
    #[error("Invalid descriptor {}: {}", .path.display(), .source)]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The software package does not reference a component descriptor.
    #[error("Software package '{package}' has no component descriptor reference")]
    MissingScdReference { package: String },
}

/// Errors raised by a sandbox or by a launched component.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// The component package could not be loaded.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The requested implementation is not declared by the package.
    #[error("Software package '{package}' has no implementation '{id}'")]
    UnknownImplementation { package: String, id: String },

    /// The package declares no implementations at all.
    #[error("Software package '{package}' declares no implementations")]
    NoImplementations { package: String },

    /// The component was used after its sandbox released it.
    #[error("Component {component} has been released")]
    Released { component: ComponentId },

    /// A lifecycle call failed inside the component.
    #[error("{operation} failed on {component}: {reason}")]
    Lifecycle {
        component: ComponentId,
        operation: &'static str,
        reason: String,
    },
}

/// Errors that stop a harness run before any test case executes.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The harness configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The component package could not be loaded.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// A selected implementation is not declared by the package.
    #[error("Implementation '{id}' is not declared by '{package}' (available: {available:?})")]
    UnknownImplementation {
        package: String,
        id: String,
        available: Vec<String>,
    },

    /// A selected test case does not exist.
    #[error("Unknown test case '{0}'")]
    UnknownCase(String),
}

/// Result type alias for sandbox operations.
pub type SandboxResult<T> = std::result::Result<T, SandboxError>;
