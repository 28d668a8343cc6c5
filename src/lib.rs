pub mod core;

// Re-export commonly used types
pub use crate::core::descriptor::{ComponentPackage, SoftPkg, SoftwareComponent};
pub use crate::core::errors::{DescriptorError, HarnessError, SandboxError};
pub use crate::core::harness::{HarnessConfig, HarnessRunner, RunReport};
pub use crate::core::ports::{find_port_definition, PortDefinition};
pub use crate::core::sandbox::{LaunchRequest, LaunchedComponent, LocalSandbox, PortHandle, Sandbox};
pub use crate::core::types::{ComponentId, ObjectRef, PortDirection};
