//! Engine configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use hexdrift_space::WindowError;
use hexdrift_store::{StoreError, MAX_SPATIAL_RANGE};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EngineConfig`] or starting the
/// realtime driver.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Window radius is zero.
    InvalidRadius {
        /// The rejected value.
        value: u32,
    },
    /// Occupancy frequency is below 2.
    InvalidFrequency {
        /// The rejected value.
        value: u32,
    },
    /// Color range is outside `1..=256`.
    InvalidColorRange {
        /// The rejected value.
        value: u32,
    },
    /// Expiration horizon is below 2.
    InvalidExpire {
        /// The rejected value.
        value: i64,
    },
    /// Time limit is below 1.
    InvalidTimeLimit {
        /// The rejected value.
        value: i64,
    },
    /// Move limit is zero.
    InvalidMoveLimit {
        /// The rejected value.
        value: u64,
    },
    /// Spatial range is zero or above [`MAX_SPATIAL_RANGE`].
    InvalidSpatialRange {
        /// The rejected value.
        value: u32,
    },
    /// `tick_rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The rejected value.
        value: f64,
    },
    /// The window could not be built or filled.
    Window(WindowError),
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { value } => write!(f, "radius {value} must be at least 1"),
            Self::InvalidFrequency { value } => {
                write!(f, "frequency {value} must be at least 2")
            }
            Self::InvalidColorRange { value } => {
                write!(f, "color_range {value} must be in 1..=256")
            }
            Self::InvalidExpire { value } => write!(f, "expire {value} must be at least 2"),
            Self::InvalidTimeLimit { value } => {
                write!(f, "time_limit {value} must be at least 1")
            }
            Self::InvalidMoveLimit { value } => {
                write!(f, "move_limit {value} must be at least 1")
            }
            Self::InvalidSpatialRange { value } => {
                write!(f, "spatial_range {value} must be in 1..={MAX_SPATIAL_RANGE}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::Window(e) => write!(f, "window: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Window(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WindowError> for ConfigError {
    fn from(e: WindowError) -> Self {
        Self::Window(e)
    }
}

impl From<StoreError> for ConfigError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidTimeLimit { value } => Self::InvalidTimeLimit { value },
            StoreError::InvalidExpire { value } => Self::InvalidExpire { value },
            StoreError::InvalidMoveLimit { value } => Self::InvalidMoveLimit { value },
            StoreError::InvalidSpatialRange { value } => Self::InvalidSpatialRange { value },
            StoreError::InvalidFrequency { value } => Self::InvalidFrequency { value },
            StoreError::InvalidColorRange { value } => Self::InvalidColorRange { value },
        }
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Window radius `R`, counting the centre. The window holds
    /// `1 + 3R(R - 1)` cells. Default: 8.
    pub radius: u32,
    /// One in `frequency` generated cells holds content. Default: 12.
    pub frequency: u32,
    /// Content colors are drawn from `0..color_range`. Default: 64.
    pub color_range: u32,
    /// Age at which cache entries expire; the snake never reaches this
    /// length. Default: 256.
    pub expire: i64,
    /// Ticks between clock rebases. Default: 4096.
    pub time_limit: i64,
    /// Moves between origin rebases. Default: 4096.
    pub move_limit: u64,
    /// Distance the origin may drift before it rebases. Default: 1024.
    pub spatial_range: u32,
    /// Seed for the cell generator.
    pub seed: u64,
    /// Realtime driver cadence. Default: 20 Hz.
    pub tick_rate_hz: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius: 8,
            frequency: 12,
            color_range: 64,
            expire: 256,
            time_limit: 4096,
            move_limit: 4096,
            spatial_range: 1024,
            seed: 0,
            tick_rate_hz: 20.0,
        }
    }
}

impl EngineConfig {
    /// Check every invariant without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::InvalidRadius { value: self.radius });
        }
        if self.frequency < 2 {
            return Err(ConfigError::InvalidFrequency {
                value: self.frequency,
            });
        }
        if !(1..=256).contains(&self.color_range) {
            return Err(ConfigError::InvalidColorRange {
                value: self.color_range,
            });
        }
        if self.expire < 2 {
            return Err(ConfigError::InvalidExpire { value: self.expire });
        }
        if self.time_limit < 1 {
            return Err(ConfigError::InvalidTimeLimit {
                value: self.time_limit,
            });
        }
        if self.move_limit == 0 {
            return Err(ConfigError::InvalidMoveLimit {
                value: self.move_limit,
            });
        }
        if self.spatial_range == 0 || self.spatial_range > MAX_SPATIAL_RANGE {
            return Err(ConfigError::InvalidSpatialRange {
                value: self.spatial_range,
            });
        }
        // The reciprocal must be finite too, or Duration::from_secs_f64 panics.
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        Ok(())
    }

    /// Number of cells in the window.
    pub fn window_len(&self) -> usize {
        hexdrift_space::disk_len(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert_eq!(EngineConfig::default().window_len(), 169);
    }

    #[test]
    fn each_invariant_is_checked() {
        let bad: [(fn(&mut EngineConfig), ConfigError); 8] = [
            (|c| c.radius = 0, ConfigError::InvalidRadius { value: 0 }),
            (|c| c.frequency = 1, ConfigError::InvalidFrequency { value: 1 }),
            (|c| c.color_range = 0, ConfigError::InvalidColorRange { value: 0 }),
            (|c| c.expire = 1, ConfigError::InvalidExpire { value: 1 }),
            (|c| c.time_limit = 0, ConfigError::InvalidTimeLimit { value: 0 }),
            (|c| c.move_limit = 0, ConfigError::InvalidMoveLimit { value: 0 }),
            (
                |c| c.spatial_range = MAX_SPATIAL_RANGE + 1,
                ConfigError::InvalidSpatialRange {
                    value: MAX_SPATIAL_RANGE + 1,
                },
            ),
            (|c| c.tick_rate_hz = -1.0, ConfigError::InvalidTickRate { value: -1.0 }),
        ];
        for (mutate, expected) in bad {
            let mut config = EngineConfig::default();
            mutate(&mut config);
            assert_eq!(config.validate().unwrap_err(), expected);
        }
    }

    #[test]
    fn rejects_nan_and_subnormal_tick_rates() {
        for hz in [f64::NAN, f64::INFINITY, 0.0, f64::MIN_POSITIVE / 4.0] {
            let config = EngineConfig {
                tick_rate_hz: hz,
                ..EngineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTickRate { .. })
            ));
        }
    }

    #[test]
    fn store_errors_map_to_config_errors() {
        let e: ConfigError = StoreError::InvalidExpire { value: 0 }.into();
        assert_eq!(e, ConfigError::InvalidExpire { value: 0 });
        assert!(e.to_string().contains("expire"));
    }
}
