//! The state trait and the transitions a state can request.
//!
//! A state is generic over the owner type `O` (the entity being decorated
//! with behavior; the agent never interprets it, only forwards it) and the
//! event type `E` (the set of events this controller type dispatches; the
//! enum's variants are the binding set, and their fields carry the
//! event-specific arguments).

/// A stack operation requested by a state, applied by the
/// [`Agent`](crate::Agent) after the handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current frame on top.
    Stay,

    /// Suspend the current frame and enter the named state above it. The
    /// suspended state is *not* exited; it resumes, locals intact, when the
    /// pushed state pops back off.
    Push(&'static str),

    /// Exit the current frame and resume the one beneath it. The resumed
    /// state does not get re-entered.
    Pop,

    /// Exit the current frame and enter the named state at the same depth.
    /// The outgoing state's exit completes before the incoming state's
    /// enter begins.
    Switch(&'static str),
}

/// A behavior state. Implement the callbacks you care about; the defaults
/// are no-ops, so a state that only ever reacts to one event stays one
/// method long.
pub trait State<O, E>: Send + Sync + 'static {
    /// Called when this state's frame is pushed onto the stack (or entered
    /// via a switch).
    fn on_enter(&mut self, _owner: &mut O) {}

    /// Called when this state's frame is popped off the stack (or replaced
    /// via a switch, or torn down). Not called when the frame is merely
    /// suspended beneath a pushed state.
    fn on_exit(&mut self, _owner: &mut O) {}

    /// Called for each event dispatched while this frame is on top of the
    /// stack. Events an implementation does not match are intentional
    /// no-ops, not errors.
    fn handle(&mut self, _owner: &mut O, _event: E) -> Transition {
        Transition::Stay
    }
}
