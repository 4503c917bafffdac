//! Numeric tuning tables for the behavior modules.
//!
//! Feel constants are data, not code: every module reads its numbers from a
//! tuning struct carried by the owner. The defaults below are reasonable
//! platformer values; a RON file can override any subset of them (fields
//! absent from the file keep their defaults).

/// Player locomotion tuning. Speeds are px/s, accelerations px/s², y is up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTuning {
    /// Top walking speed.
    pub walk_speed: f32,
    /// Ground acceleration toward the held direction.
    pub walk_accel: f32,
    /// Deceleration applied when no direction is held.
    pub brake: f32,
    /// Horizontal acceleration available mid-air.
    pub air_accel: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Upward velocity applied on jump.
    pub jump_impulse: f32,
    /// Upward velocity applied when bouncing off a stomped enemy.
    pub stomp_bounce: f32,
    /// Upward velocity at the start of the death flourish.
    pub death_pop: f32,
    /// Seconds the death flourish lasts before the entity is despawned.
    pub death_delay: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            walk_speed: 96.,
            walk_accel: 320.,
            brake: 416.,
            air_accel: 192.,
            gravity: 480.,
            jump_impulse: 208.,
            stomp_bounce: 128.,
            death_pop: 176.,
            death_delay: 1.5,
        }
    }
}

/// Goomba tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GoombaTuning {
    /// Patrol speed.
    pub walk_speed: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Seconds the flattened sprite lingers before despawning.
    pub squish_delay: f32,
}

impl Default for GoombaTuning {
    fn default() -> Self {
        Self {
            walk_speed: 32.,
            gravity: 480.,
            squish_delay: 0.5,
        }
    }
}

/// Koopa tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KoopaTuning {
    /// Patrol speed.
    pub walk_speed: f32,
    /// Shell slide speed once kicked.
    pub slide_speed: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
}

impl Default for KoopaTuning {
    fn default() -> Self {
        Self {
            walk_speed: 32.,
            slide_speed: 160.,
            gravity: 480.,
        }
    }
}

/// Screen wipe tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WipeTuning {
    /// Seconds a wipe takes to fully cover (or uncover) the screen.
    pub duration: f32,
}

impl Default for WipeTuning {
    fn default() -> Self {
        Self { duration: 0.4 }
    }
}

/// All tuning tables, as loaded from a single data file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    pub player: PlayerTuning,
    pub goomba: GoombaTuning,
    pub koopa: KoopaTuning,
    pub wipe: WipeTuning,
}

/// Common result type for loaders.
#[cfg(feature = "loaders")]
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for tuning tables from RON files.
#[cfg(feature = "loaders")]
pub struct TuningLoader;

#[cfg(feature = "loaders")]
impl TuningLoader {
    /// Load a [`Tuning`] table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the tuning tables
    ///
    /// # Returns
    ///
    /// Returns a [`Tuning`] with file values layered over the defaults.
    pub fn load(path: &std::path::Path) -> LoadResult<Tuning> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        let tuning: Tuning = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tuning RON: {}", e))?;
        Ok(tuning)
    }
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_tuning_file_keeps_defaults_for_absent_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "(player: (walk_speed: 123.0), wipe: (duration: 1.0))"
        )
        .unwrap();

        let tuning = TuningLoader::load(file.path()).unwrap();
        assert_eq!(tuning.player.walk_speed, 123.0);
        assert_eq!(tuning.wipe.duration, 1.0);
        // Everything not named in the file is untouched.
        assert_eq!(tuning.player.gravity, PlayerTuning::default().gravity);
        assert_eq!(tuning.goomba, GoombaTuning::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TuningLoader::load(&dir.path().join("absent.ron"));
        assert!(result.is_err());
    }
}
