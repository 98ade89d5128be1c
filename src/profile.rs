//! Species profiles: the ordered tolerances a species carries, paired with the
//! axis catalogue they refer to.
//!
//! Tolerance `i` and axis `i` always describe the same dimension. The pairing
//! is checked once in [`SpeciesProfile::new`]; scoring relies on it without
//! re-checking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::environment::Tolerance;

/// Most axes a profile may carry. Each ranged axis multiplies the sampled
/// planets per pass by eleven.
pub const MAX_AXES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("axis value {value} is outside 0..=100")]
    OutOfBounds { value: i32 },
    #[error("range maximum {maximum} must exceed minimum {minimum}")]
    InvertedRange { minimum: i32, maximum: i32 },
    #[error("range {minimum}..={maximum} is too narrow to have a habitable radius")]
    DegenerateRange { minimum: i32, maximum: i32 },
    #[error("catalogue has {axes} axes but profile has {tolerances} tolerances")]
    LengthMismatch { axes: usize, tolerances: usize },
    #[error("profile must cover at least one axis")]
    Empty,
    #[error("profile has {axes} axes; at most {max} are supported")]
    TooManyAxes { axes: usize, max: usize },
    #[error("axis order must be a permutation of 0..{len}")]
    InvalidPermutation { len: usize },
}

/// Presentation unit of an axis. Only consulted when rendering values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisUnit {
    Gravity,
    Temperature,
    Radiation,
    #[default]
    Raw,
}

/// Label for one environmental dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub name: String,
    pub unit: AxisUnit,
}

impl Axis {
    pub fn new(name: impl Into<String>, unit: AxisUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisCatalogue {
    axes: Vec<Axis>,
}

impl AxisCatalogue {
    pub fn new(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }
}

/// Everything the scoring engine needs to know about a species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesProfile {
    catalogue: AxisCatalogue,
    tolerances: Vec<Tolerance>,
    total_terraforming: bool,
}

impl SpeciesProfile {
    pub fn new(
        catalogue: AxisCatalogue,
        tolerances: Vec<Tolerance>,
        total_terraforming: bool,
    ) -> Result<Self, ProfileError> {
        if tolerances.is_empty() {
            return Err(ProfileError::Empty);
        }
        if tolerances.len() > MAX_AXES {
            return Err(ProfileError::TooManyAxes {
                axes: tolerances.len(),
                max: MAX_AXES,
            });
        }
        if catalogue.len() != tolerances.len() {
            return Err(ProfileError::LengthMismatch {
                axes: catalogue.len(),
                tolerances: tolerances.len(),
            });
        }
        Ok(Self {
            catalogue,
            tolerances,
            total_terraforming,
        })
    }

    pub fn catalogue(&self) -> &AxisCatalogue {
        &self.catalogue
    }

    pub fn tolerances(&self) -> &[Tolerance] {
        &self.tolerances
    }

    pub fn total_terraforming(&self) -> bool {
        self.total_terraforming
    }

    /// Iterates axes alongside their tolerances, in catalogue order.
    pub fn axes(&self) -> impl Iterator<Item = (&Axis, &Tolerance)> {
        self.catalogue.iter().zip(self.tolerances.iter())
    }

    pub fn with_total_terraforming(mut self, total_terraforming: bool) -> Self {
        self.total_terraforming = total_terraforming;
        self
    }

    /// Reorders catalogue and tolerances together; `order[i]` names the
    /// current position that moves to position `i`.
    pub fn permuted(&self, order: &[usize]) -> Result<Self, ProfileError> {
        let len = self.tolerances.len();
        let mut seen = vec![false; len];
        if order.len() != len {
            return Err(ProfileError::InvalidPermutation { len });
        }
        for &index in order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(ProfileError::InvalidPermutation { len }),
            }
        }
        let axes = order
            .iter()
            .map(|&index| self.catalogue.axes[index].clone())
            .collect();
        let tolerances = order.iter().map(|&index| self.tolerances[index]).collect();
        Ok(Self {
            catalogue: AxisCatalogue::new(axes),
            tolerances,
            total_terraforming: self.total_terraforming,
        })
    }
}
