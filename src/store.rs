//! Session store for validated observations.
//!
//! One store is owned by one session; every user action runs to completion
//! before the next, so the store needs no locking discipline.

use crate::observation::{Group, Observation, ValidationError, VALUE_MAX, VALUE_MIN};

/// Ordered, session-owned collection of validated observations.
///
/// Ids start at 1, increase by one per successful append and are never reused
/// within a session; [`clear`](ObservationStore::clear) discards the data and
/// restarts numbering at 1.
///
/// ```
/// use coldpress::store::ObservationStore;
///
/// let mut store = ObservationStore::new();
/// let obs = store.append("Group A", 12.5).unwrap();
/// assert_eq!(obs.id, 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct ObservationStore {
    observations: Vec<Observation>,
    next_id: u64,
}

impl ObservationStore {
    /// Create an empty store; the first observation receives id 1.
    pub fn new() -> Self {
        Self {
            observations: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and append a candidate observation.
    ///
    /// The append is atomic: either the observation is stored under a fresh
    /// id and a copy of it is returned, or the rejection reason is returned
    /// and the store is left untouched.
    pub fn append(&mut self, group: &str, value: f64) -> Result<Observation, ValidationError> {
        let group = Group::from_label(group)?;
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue);
        }
        if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
            return Err(ValidationError::ValueOutOfRange { value });
        }

        let observation = Observation {
            id: self.next_id,
            group,
            value,
        };
        self.observations.push(observation.clone());
        self.next_id += 1;
        tracing::debug!(
            id = observation.id,
            group = %observation.group,
            value,
            "observation recorded"
        );
        Ok(observation)
    }

    /// Discard every observation and reset the id counter to 1.
    ///
    /// Always succeeds; there is no undo.
    pub fn clear(&mut self) {
        let discarded = self.observations.len();
        self.observations.clear();
        self.next_id = 1;
        tracing::debug!(discarded, "session reset");
    }

    /// Ordered read-only view of the recorded observations.
    pub fn snapshot(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of recorded observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when no observations are recorded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Id the next successful append will assign.
    ///
    /// The form displays this as the upcoming participant number.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for ObservationStore {
    fn default() -> Self {
        Self::new()
    }
}
