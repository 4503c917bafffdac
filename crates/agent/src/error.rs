//! Errors raised by state registration and stack operations.

/// Errors from [`Registry`](crate::Registry) construction and
/// [`Agent`](crate::Agent) stack operations.
///
/// Every variant is a programmer error: a typo'd state name, a duplicated
/// definition, or mismatched push/pop calls. They are surfaced immediately
/// so they get caught in development rather than silently corrupting an
/// entity's behavior at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// `push` or `switch` named a state that was never registered.
    #[error("unknown state `{0}`")]
    UnknownState(String),

    /// A state name was registered twice for the same controller type.
    #[error("state `{0}` is already registered")]
    DuplicateState(&'static str),

    /// `pop` would have removed the bottom frame, leaving no active state.
    #[error("cannot pop the bottom frame of a state stack")]
    PopBottom,

    /// `pop` or `switch` was called on a stack with no active frames.
    #[error("state stack has no active frames")]
    EmptyStack,
}
