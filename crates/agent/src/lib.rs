//! Hierarchical state stack for per-entity game behavior.
//!
//! Entity behavior (player locomotion, enemy lifecycles, UI transitions) is
//! expressed as a stack of named states driven by a per-entity [`Agent`].
//! New states are pushed on top of the stack while the old ones stay in
//! memory suspended, which makes this a push-down automaton: pushing a state
//! pauses the one beneath it, popping resumes it exactly where it left off.
//!
//! Events are delivered to the top of the stack only. A state reacts by
//! returning a [`Transition`]: stay put, push a nested state, pop back to
//! the suspended one, or switch to a sibling at the same depth. States are
//! registered by name in a [`Registry`] built once at startup and shared
//! (read-only) by every agent of that controller type.
//!
//! # Architecture
//!
//! - [`State`]: trait for behavior states; implement only the callbacks you
//!   care about, the rest default to no-ops
//! - [`Registry`]: name → state-constructor table for a controller type
//! - [`Agent`]: the per-entity frame stack and event dispatcher
//! - [`routine`]: resumable multi-frame operations ([`Delay`], [`Sequence`])
//!   advanced one step per update

pub mod agent;
pub mod error;
pub mod registry;
pub mod routine;
pub mod state;

// Re-export core types for ergonomic API
pub use agent::Agent;
pub use error::AgentError;
pub use registry::{Registry, RegistryBuilder};
pub use routine::{Delay, Progress, Routine, Sequence};
pub use state::{State, Transition};
