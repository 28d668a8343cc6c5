//! Launching components and talking to them while they run.
//!
//! The harness only sees the [`Sandbox`] and [`LaunchedComponent`] traits, so
//! any host that can launch a component package and list its ports can be
//! plugged in. [`LocalSandbox`] is the in-process implementation.

pub mod local;

use std::path::PathBuf;

use crate::core::descriptor::SoftwareComponent;
use crate::core::errors::SandboxResult;
use crate::core::types::{ComponentId, ObjectRef, PortDirection};

pub use local::{LifecycleState, LocalComponent, LocalSandbox};

/// What to launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub spd_path: PathBuf,
    /// Implementation id; the package's first implementation when `None`
    pub implementation: Option<String>,
}

impl LaunchRequest {
    pub fn new(spd_path: impl Into<PathBuf>) -> Self {
        Self {
            spd_path: spd_path.into(),
            implementation: None,
        }
    }

    pub fn with_implementation(mut self, id: &str) -> Self {
        self.implementation = Some(id.to_string());
        self
    }
}

/// Runtime view of one port on a running component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortHandle {
    pub name: String,
    pub repid: String,
    pub description: String,
    pub direction: PortDirection,
    /// Live object backing the port
    pub object: Option<ObjectRef>,
}

/// Host infrastructure able to launch and release components
pub trait Sandbox {
    type Component: LaunchedComponent;

    /// Launch the component described by the request
    fn launch(&mut self, request: &LaunchRequest) -> SandboxResult<Self::Component>;

    /// Release everything launched so far
    fn release(&mut self) -> SandboxResult<()>;
}

/// A running component instance
pub trait LaunchedComponent {
    fn id(&self) -> &ComponentId;

    fn start(&mut self) -> SandboxResult<()>;

    fn stop(&mut self) -> SandboxResult<()>;

    /// Ports reported by the running instance
    fn port_set(&self) -> SandboxResult<Vec<PortHandle>>;

    /// The component descriptor the instance was launched from
    fn descriptor(&self) -> &SoftwareComponent;
}
