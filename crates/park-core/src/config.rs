//! Ride configuration.

/// Capacity used when a ride is configured with a capacity below 1.
pub const DEFAULT_MAX_CAPACITY: usize = 2;

/// Identity and sizing of one ride.
///
/// Typically built by the application crate and handed to
/// `park_ride::RideState::from_config` or `RideBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideConfig {
    /// Display name; also the stem of exported history file names.
    pub name: String,

    /// Visitors boarded per cycle.  Always ≥ 1 when built via [`RideConfig::new`].
    pub max_capacity: usize,
}

impl RideConfig {
    /// Build a config, coercing `max_capacity < 1` to [`DEFAULT_MAX_CAPACITY`].
    ///
    /// Takes `i64` so that negative requests from untyped sources (CLI,
    /// config files) are coerced rather than rejected.
    pub fn new(name: impl Into<String>, max_capacity: i64) -> Self {
        let max_capacity = if max_capacity >= 1 {
            usize::try_from(max_capacity).unwrap_or(usize::MAX)
        } else {
            DEFAULT_MAX_CAPACITY
        };
        Self { name: name.into(), max_capacity }
    }

    /// Re-apply the capacity floor.  Used when a config was deserialized or
    /// built with a struct literal.
    pub fn normalized(mut self) -> Self {
        if self.max_capacity < 1 {
            self.max_capacity = DEFAULT_MAX_CAPACITY;
        }
        self
    }
}
