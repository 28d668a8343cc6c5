use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use super::{LaunchRequest, LaunchedComponent, PortHandle, Sandbox};
use crate::core::descriptor::{ComponentPackage, SoftwareComponent};
use crate::core::errors::{SandboxError, SandboxResult};
use crate::core::ports::declared_port_definitions;
use crate::core::types::{ComponentId, ObjectRef};

/// Lifecycle of an in-process component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Launched,
    Started,
    Stopped,
    Released,
}

/// Launches components in-process, deriving their runtime ports from the
/// package's component descriptor
pub struct LocalSandbox {
    /// Instances launched since the last release
    launched: Vec<Rc<RefCell<LifecycleState>>>,
    /// Counter for instance name generation
    id_counter: u64,
}

/// Component instance created by [`LocalSandbox`]
pub struct LocalComponent {
    id: ComponentId,
    package: ComponentPackage,
    ports: Vec<PortHandle>,
    state: Rc<RefCell<LifecycleState>>,
}

impl LocalSandbox {
    pub fn new() -> Self {
        Self {
            launched: Vec::new(),
            id_counter: 0,
        }
    }

    /// Number of instances that have not been released
    pub fn live_count(&self) -> usize {
        self.launched.len()
    }

    /// Generate a unique instance name
    fn generate_unique_id(&mut self, package: &str, implementation: &str) -> ComponentId {
        self.id_counter += 1;
        ComponentId::new(
            format!("{}_{}", package, self.id_counter),
            implementation.to_string(),
        )
    }
}

impl Default for LocalSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox for LocalSandbox {
    type Component = LocalComponent;

    fn launch(&mut self, request: &LaunchRequest) -> SandboxResult<LocalComponent> {
        let package = ComponentPackage::load(&request.spd_path)?;

        let implementation = match &request.implementation {
            Some(id) => package
                .implementation(id)
                .ok_or_else(|| SandboxError::UnknownImplementation {
                    package: package.name().to_string(),
                    id: id.clone(),
                })?,
            None => package.softpkg().implementations.first().ok_or_else(|| {
                SandboxError::NoImplementations {
                    package: package.name().to_string(),
                }
            })?,
        };

        let id = self.generate_unique_id(package.name(), &implementation.id);
        let ports = build_port_set(package.scd());
        info!("Launched {} with {} ports", id, ports.len());

        let state = Rc::new(RefCell::new(LifecycleState::Launched));
        self.launched.push(Rc::clone(&state));

        Ok(LocalComponent {
            id,
            package,
            ports,
            state,
        })
    }

    fn release(&mut self) -> SandboxResult<()> {
        if !self.launched.is_empty() {
            debug!("Releasing {} component instance(s)", self.launched.len());
        }
        for state in self.launched.drain(..) {
            *state.borrow_mut() = LifecycleState::Released;
        }
        Ok(())
    }
}

impl LocalComponent {
    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    fn transition(&mut self, operation: &'static str, next: LifecycleState) -> SandboxResult<()> {
        let mut state = self.state.borrow_mut();
        if *state == LifecycleState::Released {
            return Err(SandboxError::Released {
                component: self.id.clone(),
            });
        }
        debug!("{} {}: {:?} -> {:?}", operation, self.id, *state, next);
        *state = next;
        Ok(())
    }
}

impl LaunchedComponent for LocalComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn start(&mut self) -> SandboxResult<()> {
        self.transition("start", LifecycleState::Started)
    }

    fn stop(&mut self) -> SandboxResult<()> {
        self.transition("stop", LifecycleState::Stopped)
    }

    fn port_set(&self) -> SandboxResult<Vec<PortHandle>> {
        if self.state() == LifecycleState::Released {
            return Err(SandboxError::Released {
                component: self.id.clone(),
            });
        }
        Ok(self.ports.clone())
    }

    fn descriptor(&self) -> &SoftwareComponent {
        self.package.scd()
    }
}

/// Build the runtime port list: one handle per declared name, in
/// first-declaration order, with a fresh object reference each.
///
/// Handles carry exactly what [`declared_port_definitions`] reconciles, so a
/// healthy in-process component always agrees with its descriptor.
fn build_port_set(scd: &SoftwareComponent) -> Vec<PortHandle> {
    declared_port_definitions(scd)
        .into_iter()
        .map(|(name, definition)| PortHandle {
            description: definition.expected_description().to_string(),
            name,
            repid: definition.repid,
            direction: definition.direction,
            object: Some(ObjectRef::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::{Ports, ProvidesPort, UsesPort};
    use crate::core::types::PortDirection;

    #[test]
    fn test_port_set_merges_bidirectional_names() {
        let scd = SoftwareComponent::with_ports(
            Ports::new()
                .with_provides(
                    ProvidesPort::new("msg", "IDL:Msg/Event:1.0").with_description("events"),
                )
                .with_uses(UsesPort::new("out", "IDL:A/B:1.0"))
                .with_uses(UsesPort::new("msg", "IDL:Msg/Event:1.0")),
        );

        let ports = build_port_set(&scd);
        assert_eq!(ports.len(), 2);

        assert_eq!(ports[0].name, "msg");
        assert_eq!(ports[0].direction, PortDirection::Bidir);
        assert_eq!(ports[0].description, "events");

        assert_eq!(ports[1].name, "out");
        assert_eq!(ports[1].direction, PortDirection::Uses);
        assert_eq!(ports[1].description, "");
        assert!(ports.iter().all(|p| p.object.is_some()));
    }

    #[test]
    fn test_port_set_keeps_first_declaration() {
        let scd = SoftwareComponent::with_ports(
            Ports::new()
                .with_provides(ProvidesPort::new("in", "IDL:First/In:1.0"))
                .with_provides(ProvidesPort::new("in", "IDL:Second/In:1.0")),
        );

        let ports = build_port_set(&scd);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].repid, "IDL:First/In:1.0");
        assert_eq!(ports[0].direction, PortDirection::Provides);
    }

    #[test]
    fn test_release_without_launch_is_harmless() {
        let mut sandbox = LocalSandbox::new();
        assert!(sandbox.release().is_ok());
        assert!(sandbox.release().is_ok());
        assert_eq!(sandbox.live_count(), 0);
    }
}
