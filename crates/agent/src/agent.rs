//! The per-entity controller: an ordered stack of active state frames.

use std::fmt;

use tracing::trace;

use crate::{
    error::AgentError,
    registry::Registry,
    state::{State, Transition},
};

/// One activation of a named state. Suspended frames keep their instance
/// (and with it any per-activation locals) until they are popped back to.
struct Frame<O, E> {
    name: &'static str,
    state: Box<dyn State<O, E>>,
}

/// A per-entity behavior controller.
///
/// An agent starts idle: until the first [`push`](Agent::push), dispatching
/// is a no-op. Once started, the bottom frame persists until the controller
/// is torn down or discarded; popping it is an error, since that would
/// leave the entity with no active behavior.
///
/// Each agent owns its stack exclusively; instances of the same controller
/// type share nothing but the read-only [`Registry`] they are driven by.
pub struct Agent<O, E> {
    stack: Vec<Frame<O, E>>,
}

impl<O, E> Agent<O, E>
where
    O: 'static,
    E: 'static,
{
    /// Creates an idle agent with an empty stack.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Number of active frames.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` when no state has been pushed yet (or after
    /// [`teardown`](Agent::teardown)).
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Name of the state currently receiving events.
    pub fn current(&self) -> Option<&'static str> {
        self.stack.last().map(|frame| frame.name)
    }

    /// Suspends the current top frame (without exiting it) and enters the
    /// named state above it.
    ///
    /// Fails with [`AgentError::UnknownState`] if `name` was never
    /// registered; the stack is left untouched.
    pub fn push(
        &mut self,
        registry: &Registry<O, E>,
        owner: &mut O,
        name: &str,
    ) -> Result<(), AgentError> {
        let (name, state) = registry.instantiate(name)?;
        trace!(state = name, depth = self.stack.len() + 1, "push");
        self.stack.push(Frame { name, state });
        if let Some(frame) = self.stack.last_mut() {
            frame.state.on_enter(owner);
        }
        Ok(())
    }

    /// Exits the current top frame and resumes the one beneath it. The
    /// resumed state's locals are intact and its enter callback is not
    /// re-invoked.
    ///
    /// Fails with [`AgentError::PopBottom`] if only the bottom frame
    /// remains, or [`AgentError::EmptyStack`] if the agent is idle; the
    /// stack is left untouched in both cases.
    pub fn pop(&mut self, owner: &mut O) -> Result<(), AgentError> {
        match self.stack.len() {
            0 => return Err(AgentError::EmptyStack),
            1 => return Err(AgentError::PopBottom),
            _ => {}
        }
        if let Some(mut frame) = self.stack.pop() {
            trace!(state = frame.name, depth = self.stack.len(), "pop");
            frame.state.on_exit(owner);
        }
        Ok(())
    }

    /// Exits the current top frame and enters the named state at the same
    /// depth. The outgoing exit completes before the incoming enter begins,
    /// so invariants like "old collider removed before new collider added"
    /// hold across the boundary.
    ///
    /// An unknown `name` fails before anything is exited.
    pub fn switch(
        &mut self,
        registry: &Registry<O, E>,
        owner: &mut O,
        name: &str,
    ) -> Result<(), AgentError> {
        if self.stack.is_empty() {
            return Err(AgentError::EmptyStack);
        }
        let (name, state) = registry.instantiate(name)?;
        if let Some(mut outgoing) = self.stack.pop() {
            trace!(
                from = outgoing.name,
                to = name,
                depth = self.stack.len() + 1,
                "switch"
            );
            outgoing.state.on_exit(owner);
        }
        self.stack.push(Frame { name, state });
        if let Some(frame) = self.stack.last_mut() {
            frame.state.on_enter(owner);
        }
        Ok(())
    }

    /// Hands `event` to the top frame and applies the [`Transition`] it
    /// returns. One handler invocation per dispatch: a state entered by the
    /// transition first sees the *next* dispatched event, not this one.
    ///
    /// Dispatching to an idle agent is a no-op. A failed transition (unknown
    /// target, popping the bottom frame) propagates and leaves the stack as
    /// the handler saw it.
    pub fn dispatch(
        &mut self,
        registry: &Registry<O, E>,
        owner: &mut O,
        event: E,
    ) -> Result<(), AgentError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };
        match top.state.handle(owner, event) {
            Transition::Stay => Ok(()),
            Transition::Push(name) => self.push(registry, owner, name),
            Transition::Pop => self.pop(owner),
            Transition::Switch(name) => self.switch(registry, owner, name),
        }
    }

    /// Pops every frame, invoking each exit callback from the top down. The
    /// agent is idle afterwards and can be pushed onto again. Call this
    /// before the owning entity is despawned if the bottom frames hold
    /// resources their exits release; simply dropping the agent runs no
    /// exit callbacks.
    pub fn teardown(&mut self, owner: &mut O) {
        while let Some(mut frame) = self.stack.pop() {
            trace!(state = frame.name, depth = self.stack.len(), "teardown");
            frame.state.on_exit(owner);
        }
    }
}

impl<O, E> Default for Agent<O, E>
where
    O: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> fmt::Debug for Agent<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.stack.iter().map(|frame| frame.name))
            .finish()
    }
}
