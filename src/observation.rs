//! Observation data model: group labels and validated duration measurements.

use serde::Serialize;
use thiserror::Error;

/// Inclusive lower bound for a duration measurement, in seconds.
pub const VALUE_MIN: f64 = 0.0;

/// Inclusive upper bound for a duration measurement, in seconds.
/// Participants withdraw their hand at five minutes.
pub const VALUE_MAX: f64 = 300.0;

/// The two recognized participant groups.
///
/// The comparison contract is fixed to exactly two groups; the enum keeps an
/// unrecognized third label unrepresentable past the validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Group {
    #[serde(rename = "Group A")]
    A,
    #[serde(rename = "Group B")]
    B,
}

impl Group {
    /// Both groups, in comparison order (Group A first).
    pub const ALL: [Group; 2] = [Group::A, Group::B];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Group::A => "Group A",
            Group::B => "Group B",
        }
    }

    /// Parse a label supplied by the form.
    ///
    /// Labels match exactly. An empty label and an unrecognized label are
    /// reported as distinct validation failures so the form can show which
    /// constraint was violated.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        match label {
            "" => Err(ValidationError::EmptyGroup),
            "Group A" => Ok(Group::A),
            "Group B" => Ok(Group::B),
            other => Err(ValidationError::UnrecognizedGroup {
                label: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Group {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::from_label(s)
    }
}

/// A single recorded observation: one participant's group and measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Store-assigned identifier, strictly increasing from 1.
    pub id: u64,
    /// Participant group.
    pub group: Group,
    /// Duration measurement in seconds, within `[VALUE_MIN, VALUE_MAX]`.
    pub value: f64,
}

/// A candidate observation was rejected; the store is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("group label is empty")]
    EmptyGroup,

    #[error("unrecognized group label: {label:?}")]
    UnrecognizedGroup { label: String },

    #[error("value must be a finite number of seconds")]
    NonFiniteValue,

    #[error("value {value} is outside the allowed range [0, 300] seconds")]
    ValueOutOfRange { value: f64 },
}
