pub mod descriptor;
pub mod errors;
pub mod harness;
pub mod ports;
pub mod sandbox;
pub mod types;
