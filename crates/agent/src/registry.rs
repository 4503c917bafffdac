//! State registration for a controller type.
//!
//! A [`Registry`] maps state names to constructors. It is built once at
//! startup through [`RegistryBuilder`] and then passed by shared reference
//! into every agent operation that resolves a name; there is no ambient
//! global table, so two controller types with overlapping state names never
//! collide.

use std::collections::HashMap;

use crate::{error::AgentError, state::State};

type Constructor<O, E> = Box<dyn Fn() -> Box<dyn State<O, E>> + Send + Sync>;

/// Immutable name → state-constructor table shared (read-only) by every
/// [`Agent`](crate::Agent) of a controller type.
pub struct Registry<O, E> {
    states: HashMap<&'static str, Constructor<O, E>>,
}

impl<O, E> Registry<O, E>
where
    O: 'static,
    E: 'static,
{
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder<O, E> {
        RegistryBuilder {
            states: HashMap::new(),
        }
    }

    /// Returns `true` if `name` resolves to a registered state.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no states are registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Constructs a fresh instance of the named state.
    pub(crate) fn instantiate(
        &self,
        name: &str,
    ) -> Result<(&'static str, Box<dyn State<O, E>>), AgentError> {
        let (name, constructor) = self
            .states
            .get_key_value(name)
            .ok_or_else(|| AgentError::UnknownState(name.to_owned()))?;
        Ok((name, constructor()))
    }
}

/// Builder for a [`Registry`]. Registration is fallible: naming a state
/// twice is rejected so an accidental duplicate definition surfaces at
/// startup instead of silently shadowing the original.
pub struct RegistryBuilder<O, E> {
    states: HashMap<&'static str, Constructor<O, E>>,
}

impl<O, E> RegistryBuilder<O, E>
where
    O: 'static,
    E: 'static,
{
    /// Registers `name`, constructing instances with `constructor` each time
    /// the state is entered.
    pub fn state<S, F>(mut self, name: &'static str, constructor: F) -> Result<Self, AgentError>
    where
        S: State<O, E>,
        F: Fn() -> S + Send + Sync + 'static,
    {
        if self.states.contains_key(name) {
            return Err(AgentError::DuplicateState(name));
        }
        self.states.insert(
            name,
            Box::new(move || Box::new(constructor()) as Box<dyn State<O, E>>),
        );
        Ok(self)
    }

    /// Registers `name` for a state constructed with [`Default`].
    pub fn state_default<S>(self, name: &'static str) -> Result<Self, AgentError>
    where
        S: State<O, E> + Default,
    {
        self.state(name, S::default)
    }

    /// Finishes the registry.
    pub fn build(self) -> Registry<O, E> {
        Registry {
            states: self.states,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Noop;
    impl State<(), ()> for Noop {}

    #[test]
    fn duplicate_name_is_rejected() {
        let result = Registry::<(), ()>::builder()
            .state_default::<Noop>("idle")
            .unwrap()
            .state_default::<Noop>("idle");
        assert_eq!(result.err(), Some(AgentError::DuplicateState("idle")));
    }

    #[test]
    fn lookup_resolves_registered_names_only() {
        let registry = Registry::<(), ()>::builder()
            .state_default::<Noop>("idle")
            .unwrap()
            .build();
        assert!(registry.contains("idle"));
        assert!(!registry.contains("walk"));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.instantiate("walk").err(),
            Some(AgentError::UnknownState("walk".to_owned()))
        );
    }
}
