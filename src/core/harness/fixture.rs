use log::{debug, warn};

use crate::core::errors::SandboxResult;
use crate::core::sandbox::{LaunchRequest, Sandbox};

/// One launched component scoped to a single test.
///
/// Sandbox resources are released by [`Fixture::tear_down`], or on drop when
/// the test bails out early.
pub struct Fixture<'s, S: Sandbox> {
    sandbox: &'s mut S,
    component: S::Component,
    torn_down: bool,
}

impl<'s, S: Sandbox> Fixture<'s, S> {
    /// Launch the component for a test.
    ///
    /// On failure anything the sandbox created during the attempt is released
    /// before the error is returned.
    pub fn set_up(sandbox: &'s mut S, request: &LaunchRequest) -> SandboxResult<Self> {
        debug!(
            "setUp: launching {} ({})",
            request.spd_path.display(),
            request.implementation.as_deref().unwrap_or("default implementation")
        );
        match sandbox.launch(request) {
            Ok(component) => Ok(Self {
                sandbox,
                component,
                torn_down: false,
            }),
            Err(err) => {
                if let Err(release_err) = sandbox.release() {
                    warn!("Release after failed launch also failed: {}", release_err);
                }
                Err(err)
            }
        }
    }

    pub fn component(&self) -> &S::Component {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut S::Component {
        &mut self.component
    }

    /// Release every sandbox resource created during the test
    pub fn tear_down(mut self) -> SandboxResult<()> {
        self.torn_down = true;
        debug!("tearDown: releasing sandbox");
        self.sandbox.release()
    }
}

impl<'s, S: Sandbox> Drop for Fixture<'s, S> {
    fn drop(&mut self) {
        if self.torn_down {
            return;
        }
        if let Err(err) = self.sandbox.release() {
            warn!("Failed to release sandbox while dropping fixture: {}", err);
        }
    }
}
