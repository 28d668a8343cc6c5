pub mod package;
pub mod scd;
pub mod spd;

// Re-export commonly used types
pub use package::ComponentPackage;
pub use scd::{PortDeclaration, Ports, ProvidesPort, SoftwareComponent, UsesPort};
pub use spd::{Implementation, SoftPkg};
