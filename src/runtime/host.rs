//! Component host: owns a component and its state, drives lifecycle hooks

use super::state_cell::{StateCell, StateSetter, Transition};
use thiserror::Error;
use tracing::debug;

/// Errors from misusing the host lifecycle
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    #[error("component is already attached")]
    AlreadyAttached,
    #[error("component is not attached")]
    NotAttached,
}

/// Lifecycle hooks a hosted component may implement.
///
/// The host calls them in a fixed order:
/// - attach: `on_update`, `on_attach`, `on_state_changed(None, state)`
/// - commit with a new value: `on_update_cleanup`, `on_update`,
///   `on_state_changed(Some(prev), next)`
/// - re-render with unchanged state: `on_update_cleanup`, `on_update`
/// - detach: `on_update_cleanup`, `on_detach`
pub trait Component {
    type State: Clone + PartialEq + Send + 'static;

    /// Runs once, after the first render
    fn on_attach(&mut self, _state: &Self::State) {}

    /// Runs after every render
    fn on_update(&mut self, _state: &Self::State) {}

    /// Undoes the previous `on_update`
    fn on_update_cleanup(&mut self) {}

    /// Runs after each render that committed a different state value
    fn on_state_changed(&mut self, _prev: Option<&Self::State>, _next: &Self::State) {}

    /// Runs once, when the component is removed
    fn on_detach(&mut self, _state: &Self::State) {}
}

/// Where the hosted component is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Detached,
    Attached,
    Removed,
}

/// Owns one component instance and its single state cell
pub struct Host<C: Component> {
    component: C,
    cell: StateCell<C::State>,
    phase: Phase,
    /// An `on_update` ran and its cleanup is still owed
    cleanup_owed: bool,
    renders: u64,
}

impl<C: Component> Host<C> {
    pub fn new(component: C, initial: C::State) -> Self {
        Self {
            component,
            cell: StateCell::new(initial),
            phase: Phase::Detached,
            cleanup_owed: false,
            renders: 0,
        }
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.phase == Phase::Attached
    }

    /// Current committed state
    pub fn state(&self) -> &C::State {
        self.cell.get()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Number of commits that changed the state
    pub fn revision(&self) -> u64 {
        self.cell.revision()
    }

    /// Number of render passes so far
    #[allow(dead_code)]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    #[allow(dead_code)]
    pub fn setter(&self) -> StateSetter<C::State> {
        self.cell.setter()
    }

    /// First render plus mount hooks
    pub fn attach(&mut self) -> Result<(), HostError> {
        if self.phase != Phase::Detached {
            return Err(HostError::AlreadyAttached);
        }
        self.phase = Phase::Attached;
        self.renders += 1;
        debug!(renders = self.renders, "component attached");

        let state = self.cell.get();
        self.component.on_update(state);
        self.cleanup_owed = true;
        self.component.on_attach(state);
        self.component.on_state_changed(None, state);
        Ok(())
    }

    /// Run a handler against the component with the current state and a setter
    pub fn dispatch<R>(
        &mut self,
        handler: impl FnOnce(&mut C, &C::State, &StateSetter<C::State>) -> R,
    ) -> Result<R, HostError> {
        if self.phase != Phase::Attached {
            return Err(HostError::NotAttached);
        }
        let setter = self.cell.setter();
        Ok(handler(&mut self.component, self.cell.get(), &setter))
    }

    /// Apply queued updates; re-render and notify if the value changed.
    pub fn commit(&mut self) -> Result<Option<Transition<C::State>>, HostError> {
        if self.phase != Phase::Attached {
            return Err(HostError::NotAttached);
        }
        let Some(transition) = self.cell.apply_pending() else {
            return Ok(None);
        };

        self.render_pass();
        self.component
            .on_state_changed(Some(&transition.prev), &transition.next);
        Ok(Some(transition))
    }

    /// Re-render without a state change (e.g. after a resize)
    pub fn rerender(&mut self) -> Result<(), HostError> {
        if self.phase != Phase::Attached {
            return Err(HostError::NotAttached);
        }
        self.render_pass();
        Ok(())
    }

    /// Remove the component. Pending updates are dropped.
    pub fn detach(&mut self) -> Result<(), HostError> {
        if self.phase != Phase::Attached {
            return Err(HostError::NotAttached);
        }
        let dropped = self.cell.discard_pending();
        if self.cleanup_owed {
            self.component.on_update_cleanup();
            self.cleanup_owed = false;
        }
        self.component.on_detach(self.cell.get());
        self.phase = Phase::Removed;
        debug!(dropped, renders = self.renders, "component detached");
        Ok(())
    }

    fn render_pass(&mut self) {
        self.renders += 1;
        if self.cleanup_owed {
            self.component.on_update_cleanup();
        }
        self.component.on_update(self.cell.get());
        self.cleanup_owed = true;
    }
}

impl<C: Component> Drop for Host<C> {
    fn drop(&mut self) {
        if self.phase == Phase::Attached {
            let _ = self.detach();
        }
    }
}
