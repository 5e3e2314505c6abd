//! Splitter configuration.

/// What to do when one trip visits two alternates of the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlternateCollisionPolicy {
    /// Log a warning and order the alternates by feed sequence.
    #[default]
    TieBreak,
    /// Fail the trip with `SplitError::AlternateCollision`.
    Reject,
}

/// Configuration parameters for trip splitting.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Split a registry-governed trip that runs to the end of one direction
    /// and carries on in the other into two output trips.
    pub split_turnarounds: bool,

    /// Handling of two alternates for one slot within a trip.
    pub alternate_collisions: AlternateCollisionPolicy,
}

impl SplitterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(split_turnarounds: bool, alternate_collisions: AlternateCollisionPolicy) -> Self {
        Self {
            split_turnarounds,
            alternate_collisions,
        }
    }

    /// Strict variant: any alternate collision is an error.
    pub fn strict() -> Self {
        Self {
            alternate_collisions: AlternateCollisionPolicy::Reject,
            ..Self::default()
        }
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            split_turnarounds: true,
            alternate_collisions: AlternateCollisionPolicy::TieBreak,
        }
    }
}
