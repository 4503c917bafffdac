//! Shared kinematic state for behavior owners.

/// Two-component vector used for positions and velocities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal direction an entity is facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sign along the x axis: -1 for left, +1 for right.
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.,
            Facing::Right => 1.,
        }
    }

    /// The opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing for a movement sign; non-negative maps to `Right`.
    pub fn from_sign(x: f32) -> Self {
        if x < 0. { Facing::Left } else { Facing::Right }
    }
}

/// Kinematic state shared by every behavior owner.
///
/// The host integrates `position` from `velocity` (y is up), resolves
/// collisions, and writes the contact results back into `on_ground` before
/// dispatching the next update.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
}
