pub mod definition;
pub mod validator;

pub use definition::{declared_port_definitions, find_port_definition, PortDefinition};
pub use validator::{CheckFailure, PortValidator};
