//! Canonical stop sequences.
//!
//! A `CanonicalSequence` is the hand-curated stop order for one direction
//! of one route. REQUIRED and LOOP_ANCHOR entries each own an ordering
//! slot; ALTERNATE entries borrow the slot of the stop they substitute.

use std::collections::HashMap;

use crate::domain::{Direction, InvalidStopId, StopId};

/// Role of a stop within a canonical sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Relative order must be reproduced exactly by every trip.
    Required,
    /// Substitutes for another stop's slot (detour, street-side split).
    Alternate,
    /// Opens and closes a loop; shared by both directions of the route.
    LoopAnchor,
}

impl Role {
    /// Returns true if entries with this role own an ordering slot.
    pub fn owns_slot(self) -> bool {
        matches!(self, Role::Required | Role::LoopAnchor)
    }
}

/// A stop in a canonical sequence, resolved to its ordering slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub stop_id: StopId,
    pub role: Role,
    /// Ordering slot. Shared with the substituted stop for alternates.
    pub slot: usize,
}

/// Invalid canonical sequence data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Stop id literal failed validation
    #[error(transparent)]
    InvalidStopId(#[from] InvalidStopId),

    /// Same stop listed twice
    #[error("stop {0} appears more than once")]
    DuplicateStop(StopId),

    /// Alternate names a stop that owns no slot in this sequence
    #[error("alternate {alternate} substitutes for {target}, which is not a required or loop anchor stop")]
    UnknownSubstitute { alternate: StopId, target: StopId },

    /// No required or loop anchor stop at all
    #[error("sequence has no required or loop anchor stop")]
    Empty,
}

/// The authoritative stop order for one direction of one route.
///
/// Immutable once built; shared read-only by every trip of the route.
///
/// # Examples
///
/// ```
/// use direction_splitter::domain::{Direction, StopId};
/// use direction_splitter::registry::{CanonicalSequence, Role};
///
/// let north = CanonicalSequence::builder(Direction::North)
///     .required("9227")
///     .alternate("6075", "478")
///     .loop_anchor("478")
///     .required("14339")
///     .build()
///     .unwrap();
///
/// let alt = north.resolve(&StopId::parse("6075").unwrap()).unwrap();
/// assert_eq!(alt.role, Role::Alternate);
/// assert_eq!(alt.slot, north.slot_of(&StopId::parse("478").unwrap()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalSequence {
    direction: Direction,
    /// Entries in authoring order
    entries: Vec<SequenceEntry>,
    /// Slot owners in slot order
    slot_owners: Vec<StopId>,
    /// Required stops in slot order
    required: Vec<StopId>,
    /// Stop id to index into `entries`
    index: HashMap<StopId, usize>,
}

impl CanonicalSequence {
    /// Start building a sequence for `direction`.
    pub fn builder(direction: Direction) -> CanonicalSequenceBuilder {
        CanonicalSequenceBuilder::new(direction)
    }

    /// Direction this sequence defines.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All entries, in authoring order.
    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    /// Required and loop anchor stops, in slot order.
    pub fn slot_owners(&self) -> &[StopId] {
        &self.slot_owners
    }

    /// Required stops only, in slot order.
    pub fn required_stops(&self) -> &[StopId] {
        &self.required
    }

    /// First slot-owning stop (where the direction starts).
    pub fn first_slot_owner(&self) -> &StopId {
        // Non-empty by construction
        &self.slot_owners[0]
    }

    /// Last slot-owning stop (where the direction ends).
    pub fn last_slot_owner(&self) -> &StopId {
        &self.slot_owners[self.slot_owners.len() - 1]
    }

    /// Resolve a stop to its entry, if the sequence knows it.
    pub fn resolve(&self, stop_id: &StopId) -> Option<&SequenceEntry> {
        self.index.get(stop_id).map(|&i| &self.entries[i])
    }

    /// Ordering slot of a stop, if the sequence knows it.
    pub fn slot_of(&self, stop_id: &StopId) -> Option<usize> {
        self.resolve(stop_id).map(|entry| entry.slot)
    }

    /// Role of a stop, if the sequence knows it.
    pub fn role_of(&self, stop_id: &StopId) -> Option<Role> {
        self.resolve(stop_id).map(|entry| entry.role)
    }
}

/// Builder for a `CanonicalSequence`.
///
/// Entries are validated in `build`, so authoring mistakes surface as a
/// `SequenceError` rather than a panic.
#[derive(Debug, Clone)]
pub struct CanonicalSequenceBuilder {
    direction: Direction,
    raw: Vec<RawEntry>,
}

#[derive(Debug, Clone)]
enum RawEntry {
    Required(String),
    Alternate { stop: String, substitutes: String },
    LoopAnchor(String),
}

impl CanonicalSequenceBuilder {
    /// Create an empty builder.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            raw: Vec::new(),
        }
    }

    /// Direction being built.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Add a required stop at the next slot.
    pub fn required(mut self, stop: &str) -> Self {
        self.raw.push(RawEntry::Required(stop.to_string()));
        self
    }

    /// Add an alternate for the slot owned by `substitutes`.
    ///
    /// The substituted stop may be listed before or after the alternate.
    pub fn alternate(mut self, stop: &str, substitutes: &str) -> Self {
        self.raw.push(RawEntry::Alternate {
            stop: stop.to_string(),
            substitutes: substitutes.to_string(),
        });
        self
    }

    /// Add a loop anchor at the next slot.
    pub fn loop_anchor(mut self, stop: &str) -> Self {
        self.raw.push(RawEntry::LoopAnchor(stop.to_string()));
        self
    }

    /// Validate and build the sequence.
    pub fn build(self) -> Result<CanonicalSequence, SequenceError> {
        let mut entries = Vec::with_capacity(self.raw.len());
        let mut slot_owners = Vec::new();
        let mut required = Vec::new();
        let mut index = HashMap::new();
        // (entry index, substituted stop), resolved once all slots are known
        let mut pending = Vec::new();

        for raw in self.raw {
            let (stop_id, role) = match raw {
                RawEntry::Required(stop) => (StopId::parse(&stop)?, Role::Required),
                RawEntry::LoopAnchor(stop) => (StopId::parse(&stop)?, Role::LoopAnchor),
                RawEntry::Alternate { stop, substitutes } => {
                    let target = StopId::parse(&substitutes)?;
                    pending.push((entries.len(), target));
                    (StopId::parse(&stop)?, Role::Alternate)
                }
            };

            if index.insert(stop_id.clone(), entries.len()).is_some() {
                return Err(SequenceError::DuplicateStop(stop_id));
            }

            let slot = if role.owns_slot() {
                slot_owners.push(stop_id.clone());
                if role == Role::Required {
                    required.push(stop_id.clone());
                }
                slot_owners.len() - 1
            } else {
                // Placeholder until the substituted stop is resolved
                usize::MAX
            };
            entries.push(SequenceEntry {
                stop_id,
                role,
                slot,
            });
        }

        if slot_owners.is_empty() {
            return Err(SequenceError::Empty);
        }

        for (entry_idx, target) in pending {
            let slot = index
                .get(&target)
                .map(|&i| &entries[i])
                .filter(|entry: &&SequenceEntry| entry.role.owns_slot())
                .map(|entry| entry.slot);
            match slot {
                Some(slot) => entries[entry_idx].slot = slot,
                None => {
                    return Err(SequenceError::UnknownSubstitute {
                        alternate: entries[entry_idx].stop_id.clone(),
                        target,
                    });
                }
            }
        }

        Ok(CanonicalSequence {
            direction: self.direction,
            entries,
            slot_owners,
            required,
            index,
        })
    }
}
