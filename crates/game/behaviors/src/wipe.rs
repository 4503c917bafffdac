//! Screen wipe transitions.
//!
//! The wipe controller sits above whatever scene owns it: the host keeps a
//! `normal` frame at the bottom and pushes `wipe_in` or `wipe_out` on top
//! when a transition starts. While a wipe is running it is the top frame,
//! so the scene beneath it stops receiving events (pausing it) and resumes,
//! untouched, when the wipe pops itself off.

use agent::{AgentError, Registry, State, Transition};

use crate::tuning::WipeTuning;

/// The screen as seen by the wipe controller. `coverage` is how much of the
/// screen the wipe currently hides, 0 (clear) to 1 (covered); the renderer
/// reads it each frame.
#[derive(Clone, Copy, Debug)]
pub struct WipeScreen {
    pub coverage: f32,
    pub tuning: WipeTuning,
}

impl WipeScreen {
    pub fn new(tuning: WipeTuning) -> Self {
        Self {
            coverage: 0.,
            tuning,
        }
    }
}

/// Events the wipe controller dispatches.
#[derive(Clone, Copy, Debug)]
pub enum WipeEvent {
    /// One fixed-timestep tick.
    Update { dt: f32 },
}

/// Builds the wipe registry: `normal`, `wipe_in`, `wipe_out`.
pub fn registry() -> Result<Registry<WipeScreen, WipeEvent>, AgentError> {
    let builder = Registry::builder()
        .state_default::<Normal>("normal")?
        .state_default::<WipeIn>("wipe_in")?
        .state_default::<WipeOut>("wipe_out")?;
    Ok(builder.build())
}

/// Bottom frame while no wipe is running.
#[derive(Debug, Default)]
struct Normal;

impl State<WipeScreen, WipeEvent> for Normal {}

/// Covers the screen over the tuned duration, then pops itself off.
#[derive(Debug, Default)]
struct WipeIn {
    elapsed: f32,
}

impl State<WipeScreen, WipeEvent> for WipeIn {
    fn handle(&mut self, screen: &mut WipeScreen, event: WipeEvent) -> Transition {
        let WipeEvent::Update { dt } = event;
        self.elapsed += dt;
        if self.elapsed >= screen.tuning.duration {
            screen.coverage = 1.;
            return Transition::Pop;
        }
        screen.coverage = self.elapsed / screen.tuning.duration;
        Transition::Stay
    }
}

/// Uncovers the screen over the tuned duration, then pops itself off.
#[derive(Debug, Default)]
struct WipeOut {
    elapsed: f32,
}

impl State<WipeScreen, WipeEvent> for WipeOut {
    fn handle(&mut self, screen: &mut WipeScreen, event: WipeEvent) -> Transition {
        let WipeEvent::Update { dt } = event;
        self.elapsed += dt;
        if self.elapsed >= screen.tuning.duration {
            screen.coverage = 0.;
            return Transition::Pop;
        }
        screen.coverage = 1. - self.elapsed / screen.tuning.duration;
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use agent::Agent;

    use super::*;

    const DT: f32 = 1. / 60.;

    fn fixture() -> (
        Registry<WipeScreen, WipeEvent>,
        WipeScreen,
        Agent<WipeScreen, WipeEvent>,
    ) {
        let registry = registry().unwrap();
        let screen = WipeScreen::new(WipeTuning::default());
        (registry, screen, Agent::new())
    }

    #[test]
    fn wipe_in_covers_the_screen_then_returns_to_normal() {
        let (registry, mut screen, mut agent) = fixture();
        agent.push(&registry, &mut screen, "normal").unwrap();
        agent.push(&registry, &mut screen, "wipe_in").unwrap();

        let ticks = (screen.tuning.duration / DT) as u32 + 1;
        for _ in 0..ticks {
            agent
                .dispatch(&registry, &mut screen, WipeEvent::Update { dt: DT })
                .unwrap();
        }

        assert_eq!(screen.coverage, 1.);
        assert_eq!(agent.current(), Some("normal"));
        assert_eq!(agent.depth(), 1);
    }

    #[test]
    fn coverage_rises_monotonically_while_the_wipe_runs() {
        let (registry, mut screen, mut agent) = fixture();
        agent.push(&registry, &mut screen, "normal").unwrap();
        agent.push(&registry, &mut screen, "wipe_in").unwrap();

        let mut last = 0.;
        while agent.current() == Some("wipe_in") {
            agent
                .dispatch(&registry, &mut screen, WipeEvent::Update { dt: DT })
                .unwrap();
            assert!(screen.coverage >= last);
            last = screen.coverage;
        }
        assert_eq!(screen.coverage, 1.);
    }

    #[test]
    fn wipe_out_clears_the_screen_again() {
        let (registry, mut screen, mut agent) = fixture();
        agent.push(&registry, &mut screen, "normal").unwrap();
        agent.push(&registry, &mut screen, "wipe_in").unwrap();
        for _ in 0..120 {
            agent
                .dispatch(&registry, &mut screen, WipeEvent::Update { dt: DT })
                .unwrap();
        }

        agent.push(&registry, &mut screen, "wipe_out").unwrap();
        for _ in 0..120 {
            agent
                .dispatch(&registry, &mut screen, WipeEvent::Update { dt: DT })
                .unwrap();
        }
        assert_eq!(screen.coverage, 0.);
        assert_eq!(agent.current(), Some("normal"));
    }
}
