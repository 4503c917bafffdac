//! Koopa: walk, retreat into a shell when stomped, slide when kicked.
//!
//! The three states replace each other at the same stack depth: a stomped
//! koopa is not "paused walking", it has stopped walking, so `switch` (exit
//! then enter) is the right transition throughout.

use agent::{AgentError, Registry, State, Transition};

use crate::{
    body::{Body, Facing, Vec2},
    tuning::KoopaTuning,
};

/// The koopa entity as seen by its behavior controller.
#[derive(Clone, Debug)]
pub struct Koopa {
    pub body: Body,
    pub tuning: KoopaTuning,
    /// Set once the host should despawn the entity.
    pub removed: bool,
}

impl Koopa {
    pub fn new(tuning: KoopaTuning) -> Self {
        Self {
            body: Body {
                on_ground: true,
                facing: Facing::Left,
                ..Body::default()
            },
            tuning,
            removed: false,
        }
    }
}

/// Events the koopa controller dispatches.
#[derive(Clone, Copy, Debug)]
pub enum KoopaEvent {
    /// One fixed-timestep tick.
    Update { dt: f32 },
    /// The player landed on this koopa.
    Stomp,
    /// The player kicked the shell in the given direction.
    Kick { facing: Facing },
    /// The host resolved a collision against a wall or another object.
    Bump,
}

/// Builds the koopa registry: `walk`, `shell`, `sliding`.
pub fn registry() -> Result<Registry<Koopa, KoopaEvent>, AgentError> {
    let builder = Registry::builder()
        .state_default::<Walk>("walk")?
        .state_default::<Shell>("shell")?
        .state_default::<Sliding>("sliding")?;
    Ok(builder.build())
}

/// Patrols in the facing direction, turning around on bumps.
#[derive(Debug, Default)]
struct Walk;

impl State<Koopa, KoopaEvent> for Walk {
    fn on_enter(&mut self, koopa: &mut Koopa) {
        koopa.body.velocity.x = koopa.tuning.walk_speed * koopa.body.facing.sign();
    }

    fn handle(&mut self, koopa: &mut Koopa, event: KoopaEvent) -> Transition {
        match event {
            KoopaEvent::Update { dt } => {
                koopa.body.velocity.x = koopa.tuning.walk_speed * koopa.body.facing.sign();
                if !koopa.body.on_ground {
                    koopa.body.velocity.y -= koopa.tuning.gravity * dt;
                }
                Transition::Stay
            }
            KoopaEvent::Bump => {
                koopa.body.facing = koopa.body.facing.flipped();
                Transition::Stay
            }
            KoopaEvent::Stomp => Transition::Switch("shell"),
            KoopaEvent::Kick { .. } => Transition::Stay,
        }
    }
}

/// Inert shell waiting to be kicked. The kick direction travels in the
/// event; it lands on the body so `sliding` can read it on enter.
#[derive(Debug, Default)]
struct Shell;

impl State<Koopa, KoopaEvent> for Shell {
    fn on_enter(&mut self, koopa: &mut Koopa) {
        koopa.body.velocity = Vec2::ZERO;
    }

    fn handle(&mut self, koopa: &mut Koopa, event: KoopaEvent) -> Transition {
        match event {
            KoopaEvent::Kick { facing } => {
                koopa.body.facing = facing;
                Transition::Switch("sliding")
            }
            _ => Transition::Stay,
        }
    }
}

/// Shell sliding at full speed, rebounding off walls.
#[derive(Debug, Default)]
struct Sliding;

impl State<Koopa, KoopaEvent> for Sliding {
    fn on_enter(&mut self, koopa: &mut Koopa) {
        koopa.body.velocity.x = koopa.tuning.slide_speed * koopa.body.facing.sign();
    }

    fn handle(&mut self, koopa: &mut Koopa, event: KoopaEvent) -> Transition {
        match event {
            KoopaEvent::Update { dt } => {
                koopa.body.velocity.x = koopa.tuning.slide_speed * koopa.body.facing.sign();
                if !koopa.body.on_ground {
                    koopa.body.velocity.y -= koopa.tuning.gravity * dt;
                }
                Transition::Stay
            }
            KoopaEvent::Bump => {
                koopa.body.facing = koopa.body.facing.flipped();
                Transition::Stay
            }
            KoopaEvent::Stomp => Transition::Switch("shell"),
            KoopaEvent::Kick { .. } => Transition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use agent::Agent;

    use super::*;

    const DT: f32 = 1. / 60.;

    fn fixture() -> (Registry<Koopa, KoopaEvent>, Koopa, Agent<Koopa, KoopaEvent>) {
        let registry = registry().unwrap();
        let koopa = Koopa::new(KoopaTuning::default());
        (registry, koopa, Agent::new())
    }

    #[test]
    fn stomp_kick_stomp_walks_the_shell_chain_at_constant_depth() {
        let (registry, mut koopa, mut agent) = fixture();
        agent.push(&registry, &mut koopa, "walk").unwrap();

        agent.dispatch(&registry, &mut koopa, KoopaEvent::Stomp).unwrap();
        assert_eq!(agent.current(), Some("shell"));
        assert_eq!(agent.depth(), 1);
        assert_eq!(koopa.body.velocity, Vec2::ZERO);

        agent
            .dispatch(
                &registry,
                &mut koopa,
                KoopaEvent::Kick {
                    facing: Facing::Right,
                },
            )
            .unwrap();
        assert_eq!(agent.current(), Some("sliding"));
        assert_eq!(agent.depth(), 1);
        assert_eq!(koopa.body.velocity.x, koopa.tuning.slide_speed);

        agent.dispatch(&registry, &mut koopa, KoopaEvent::Stomp).unwrap();
        assert_eq!(agent.current(), Some("shell"));
        assert_eq!(koopa.body.velocity, Vec2::ZERO);
    }

    #[test]
    fn sliding_shell_rebounds_off_walls() {
        let (registry, mut koopa, mut agent) = fixture();
        agent.push(&registry, &mut koopa, "walk").unwrap();
        agent.dispatch(&registry, &mut koopa, KoopaEvent::Stomp).unwrap();
        agent
            .dispatch(
                &registry,
                &mut koopa,
                KoopaEvent::Kick {
                    facing: Facing::Right,
                },
            )
            .unwrap();

        agent.dispatch(&registry, &mut koopa, KoopaEvent::Bump).unwrap();
        agent
            .dispatch(&registry, &mut koopa, KoopaEvent::Update { dt: DT })
            .unwrap();
        assert_eq!(koopa.body.velocity.x, -koopa.tuning.slide_speed);
    }

    #[test]
    fn kicking_a_walking_koopa_does_nothing() {
        let (registry, mut koopa, mut agent) = fixture();
        agent.push(&registry, &mut koopa, "walk").unwrap();

        agent
            .dispatch(
                &registry,
                &mut koopa,
                KoopaEvent::Kick {
                    facing: Facing::Right,
                },
            )
            .unwrap();
        assert_eq!(agent.current(), Some("walk"));
        assert_eq!(koopa.body.velocity.x, -koopa.tuning.walk_speed);
    }
}
