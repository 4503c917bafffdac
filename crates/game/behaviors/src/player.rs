//! Player locomotion states.
//!
//! The controller runs three states: `ground` at the bottom, `air` pushed on
//! top of it while jumping or falling, and `dead`. Ground is suspended, not
//! exited, while air is on top, so whatever it tracks survives the jump and
//! resumes untouched on landing.

use agent::{
    AgentError, Progress, Registry, Routine, Sequence, State, Transition,
    routine::{self, Delay},
};

use crate::{
    body::{Body, Facing, Vec2},
    tuning::PlayerTuning,
};

/// Host-maintained input snapshot for the current tick. `jump` is
/// edge-triggered: set only on the tick the button was pressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inputs {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl Inputs {
    /// Held direction as a sign along x; 0 when neither or both are held.
    pub fn direction(self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }
}

/// The player entity as seen by its behavior controller.
#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub input: Inputs,
    pub tuning: PlayerTuning,
    /// Set by the death flourish once the host should despawn the entity.
    pub removed: bool,
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            body: Body {
                on_ground: true,
                ..Body::default()
            },
            input: Inputs::default(),
            tuning,
            removed: false,
        }
    }
}

/// Events the player controller dispatches.
#[derive(Clone, Copy, Debug)]
pub enum PlayerEvent {
    /// One fixed-timestep tick.
    Update { dt: f32 },
    /// The player bounced off an enemy from above.
    Stomp,
    /// The player touched an enemy or hazard.
    Hurt,
}

/// Builds the locomotion registry: `ground`, `air`, `dead`.
pub fn registry() -> Result<Registry<Player, PlayerEvent>, AgentError> {
    let builder = Registry::builder()
        .state_default::<Ground>("ground")?
        .state_default::<Air>("air")?
        .state_default::<Dead>("dead")?;
    Ok(builder.build())
}

/// Steers horizontal velocity toward the held direction, clamped to the top
/// walking speed; brakes toward zero when no direction is held.
fn steer(player: &mut Player, dt: f32, accel: f32) {
    let direction = player.input.direction();
    let tuning = player.tuning;
    let velocity = &mut player.body.velocity;
    if direction != 0. {
        velocity.x = (velocity.x + direction * accel * dt)
            .clamp(-tuning.walk_speed, tuning.walk_speed);
        player.body.facing = Facing::from_sign(direction);
    } else {
        let brake = tuning.brake * dt;
        if velocity.x.abs() <= brake {
            velocity.x = 0.;
        } else {
            velocity.x -= brake * velocity.x.signum();
        }
    }
}

/// Grounded locomotion: walk, brake, jump, and hand control to `air` when
/// the feet leave the ground.
#[derive(Debug, Default)]
struct Ground;

impl State<Player, PlayerEvent> for Ground {
    fn handle(&mut self, player: &mut Player, event: PlayerEvent) -> Transition {
        match event {
            PlayerEvent::Update { dt } => {
                steer(player, dt, player.tuning.walk_accel);
                if player.input.jump {
                    player.body.velocity.y = player.tuning.jump_impulse;
                    player.body.on_ground = false;
                    return Transition::Push("air");
                }
                if !player.body.on_ground {
                    // Walked off a ledge.
                    return Transition::Push("air");
                }
                Transition::Stay
            }
            PlayerEvent::Hurt => Transition::Switch("dead"),
            PlayerEvent::Stomp => Transition::Stay,
        }
    }
}

/// Airborne: gravity plus reduced steering; pops back to the suspended
/// ground state once the host reports contact.
#[derive(Debug, Default)]
struct Air;

impl State<Player, PlayerEvent> for Air {
    fn handle(&mut self, player: &mut Player, event: PlayerEvent) -> Transition {
        match event {
            PlayerEvent::Update { dt } => {
                steer(player, dt, player.tuning.air_accel);
                player.body.velocity.y -= player.tuning.gravity * dt;
                if player.body.on_ground {
                    player.body.velocity.y = 0.;
                    return Transition::Pop;
                }
                Transition::Stay
            }
            PlayerEvent::Stomp => {
                player.body.velocity.y = player.tuning.stomp_bounce;
                Transition::Stay
            }
            PlayerEvent::Hurt => Transition::Switch("dead"),
        }
    }
}

/// Death flourish: pop upward, fall for a beat, then flag the entity for
/// despawn. Ignores everything but the tick.
#[derive(Default)]
struct Dead {
    script: Option<Sequence<Player>>,
}

impl State<Player, PlayerEvent> for Dead {
    fn on_enter(&mut self, player: &mut Player) {
        player.body.velocity = Vec2::new(0., player.tuning.death_pop);
        self.script = Some(Sequence::new(vec![
            Box::new(Delay::new(player.tuning.death_delay)),
            Box::new(routine::from_fn(|player: &mut Player, _dt: f32| {
                player.removed = true;
                Progress::Complete
            })),
        ]));
    }

    fn handle(&mut self, player: &mut Player, event: PlayerEvent) -> Transition {
        if let PlayerEvent::Update { dt } = event {
            // The host stops colliding a dead player; it just falls away.
            player.body.velocity.y -= player.tuning.gravity * dt;
            if let Some(script) = self.script.as_mut() {
                if script.step(player, dt).is_complete() {
                    self.script = None;
                }
            }
        }
        Transition::Stay
    }
}
