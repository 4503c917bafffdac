//! Entity behavior content built on the [`agent`] state stack.
//!
//! Each module is one controller type: an owner struct (the entity data the
//! states read and write), an event enum (the events the host dispatches to
//! it), the states themselves, and a `registry()` constructor the host calls
//! once at startup.
//!
//! Physics, collision, rendering, and input polling stay host concerns. The
//! owners carry the host's *results* as plain fields (contact flags, an
//! input snapshot) and the states drive only velocities, facing, timers,
//! and despawn flags. Feel constants live in [`tuning`] tables that can be
//! overridden from RON data files.

pub mod body;
pub mod goomba;
pub mod koopa;
pub mod player;
pub mod tuning;
pub mod wipe;

pub use body::{Body, Facing, Vec2};
pub use goomba::{Goomba, GoombaEvent};
pub use koopa::{Koopa, KoopaEvent};
pub use player::{Inputs, Player, PlayerEvent};
pub use tuning::{GoombaTuning, KoopaTuning, PlayerTuning, Tuning, WipeTuning};
pub use wipe::{WipeEvent, WipeScreen};

#[cfg(feature = "loaders")]
pub use tuning::{LoadResult, TuningLoader};
