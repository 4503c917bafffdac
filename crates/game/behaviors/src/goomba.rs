//! Goomba: walk until squished.

use agent::{AgentError, Delay, Registry, Routine, State, Transition};

use crate::{
    body::{Body, Facing, Vec2},
    tuning::GoombaTuning,
};

/// The goomba entity as seen by its behavior controller.
#[derive(Clone, Debug)]
pub struct Goomba {
    pub body: Body,
    pub tuning: GoombaTuning,
    /// Set once the host should despawn the entity.
    pub removed: bool,
}

impl Goomba {
    pub fn new(tuning: GoombaTuning) -> Self {
        Self {
            body: Body {
                on_ground: true,
                // Goombas enter walking toward the player.
                facing: Facing::Left,
                ..Body::default()
            },
            tuning,
            removed: false,
        }
    }
}

/// Events the goomba controller dispatches.
#[derive(Clone, Copy, Debug)]
pub enum GoombaEvent {
    /// One fixed-timestep tick.
    Update { dt: f32 },
    /// The player landed on this goomba.
    Squish,
    /// The host resolved a collision against a wall or another object.
    Bump,
}

/// Builds the goomba registry: `walk`, `squished`.
pub fn registry() -> Result<Registry<Goomba, GoombaEvent>, AgentError> {
    let builder = Registry::builder()
        .state_default::<Walk>("walk")?
        .state_default::<Squished>("squished")?;
    Ok(builder.build())
}

/// Patrols in the facing direction, turning around on bumps.
#[derive(Debug, Default)]
struct Walk;

impl State<Goomba, GoombaEvent> for Walk {
    fn on_enter(&mut self, goomba: &mut Goomba) {
        goomba.body.velocity.x = goomba.tuning.walk_speed * goomba.body.facing.sign();
    }

    fn handle(&mut self, goomba: &mut Goomba, event: GoombaEvent) -> Transition {
        match event {
            GoombaEvent::Update { dt } => {
                goomba.body.velocity.x = goomba.tuning.walk_speed * goomba.body.facing.sign();
                if !goomba.body.on_ground {
                    goomba.body.velocity.y -= goomba.tuning.gravity * dt;
                }
                Transition::Stay
            }
            GoombaEvent::Bump => {
                goomba.body.facing = goomba.body.facing.flipped();
                Transition::Stay
            }
            GoombaEvent::Squish => Transition::Switch("squished"),
        }
    }
}

/// Flattened: motionless for a beat, then gone. Only the tick is handled
/// here, so a second squish while already flattened does nothing.
#[derive(Default)]
struct Squished {
    linger: Option<Delay>,
}

impl State<Goomba, GoombaEvent> for Squished {
    fn on_enter(&mut self, goomba: &mut Goomba) {
        goomba.body.velocity = Vec2::ZERO;
        self.linger = Some(Delay::new(goomba.tuning.squish_delay));
    }

    fn handle(&mut self, goomba: &mut Goomba, event: GoombaEvent) -> Transition {
        if let GoombaEvent::Update { dt } = event {
            if let Some(linger) = self.linger.as_mut() {
                if linger.step(goomba, dt).is_complete() {
                    goomba.removed = true;
                    self.linger = None;
                }
            }
        }
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use agent::Agent;

    use super::*;

    const DT: f32 = 1. / 60.;

    fn fixture() -> (Registry<Goomba, GoombaEvent>, Goomba, Agent<Goomba, GoombaEvent>) {
        let registry = registry().unwrap();
        let goomba = Goomba::new(GoombaTuning::default());
        (registry, goomba, Agent::new())
    }

    #[test]
    fn bump_reverses_the_patrol_direction() {
        let (registry, mut goomba, mut agent) = fixture();
        agent.push(&registry, &mut goomba, "walk").unwrap();
        assert_eq!(goomba.body.velocity.x, -goomba.tuning.walk_speed);

        agent.dispatch(&registry, &mut goomba, GoombaEvent::Bump).unwrap();
        agent
            .dispatch(&registry, &mut goomba, GoombaEvent::Update { dt: DT })
            .unwrap();
        assert_eq!(goomba.body.velocity.x, goomba.tuning.walk_speed);
    }

    #[test]
    fn squish_stops_motion_and_despawns_after_the_linger() {
        let (registry, mut goomba, mut agent) = fixture();
        agent.push(&registry, &mut goomba, "walk").unwrap();

        agent
            .dispatch(&registry, &mut goomba, GoombaEvent::Squish)
            .unwrap();
        assert_eq!(agent.current(), Some("squished"));
        assert_eq!(goomba.body.velocity, Vec2::ZERO);

        let ticks = (goomba.tuning.squish_delay / DT) as u32 + 1;
        for _ in 0..ticks {
            agent
                .dispatch(&registry, &mut goomba, GoombaEvent::Update { dt: DT })
                .unwrap();
        }
        assert!(goomba.removed);
    }

    #[test]
    fn squishing_an_already_squished_goomba_is_a_silent_noop() {
        let (registry, mut goomba, mut agent) = fixture();
        agent.push(&registry, &mut goomba, "walk").unwrap();
        agent
            .dispatch(&registry, &mut goomba, GoombaEvent::Squish)
            .unwrap();

        let before = goomba.clone();
        agent
            .dispatch(&registry, &mut goomba, GoombaEvent::Squish)
            .unwrap();
        assert_eq!(agent.current(), Some("squished"));
        assert_eq!(agent.depth(), 1);
        assert_eq!(goomba.body.velocity, before.body.velocity);
        assert_eq!(goomba.removed, before.removed);
    }
}
