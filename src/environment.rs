//! Value types describing a species' tolerance on one environmental axis and
//! the synthetic readings sampled from it.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileError;

/// Lowest value on any normalized axis.
pub const AXIS_MIN: i32 = 0;
/// Highest value on any normalized axis.
pub const AXIS_MAX: i32 = 100;
/// Value every immune axis is sampled at.
pub const IMMUNE_SAMPLE: i32 = 50;

/// How a species copes with one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tolerance {
    Range(HabRange),
    Immune,
}

impl Tolerance {
    pub fn range(minimum: i32, maximum: i32) -> Result<Self, ProfileError> {
        HabRange::new(minimum, maximum).map(Tolerance::Range)
    }

    pub fn is_immune(&self) -> bool {
        matches!(self, Tolerance::Immune)
    }
}

/// Inclusive habitable interval on one axis.
///
/// Only constructible through [`HabRange::new`], so every instance has a
/// habitable radius of at least one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct HabRange {
    minimum: i32,
    maximum: i32,
}

#[derive(Deserialize)]
struct RawRange {
    minimum: i32,
    maximum: i32,
}

impl TryFrom<RawRange> for HabRange {
    type Error = ProfileError;

    fn try_from(value: RawRange) -> Result<Self, Self::Error> {
        HabRange::new(value.minimum, value.maximum)
    }
}

impl HabRange {
    /// Narrowest span whose half-width is non-zero.
    pub const MIN_SPAN: i32 = 2;

    pub fn new(minimum: i32, maximum: i32) -> Result<Self, ProfileError> {
        for bound in [minimum, maximum] {
            if !(AXIS_MIN..=AXIS_MAX).contains(&bound) {
                return Err(ProfileError::OutOfBounds { value: bound });
            }
        }
        if maximum <= minimum {
            return Err(ProfileError::InvertedRange { minimum, maximum });
        }
        if maximum - minimum < Self::MIN_SPAN {
            return Err(ProfileError::DegenerateRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn centre(&self) -> i32 {
        (self.minimum + self.maximum) / 2
    }

    pub fn span(&self) -> i32 {
        self.maximum - self.minimum
    }

    /// Half the span, rounded down.
    pub fn radius(&self) -> i32 {
        self.span() / 2
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    /// Lower edge of the sampled window once terraforming widens it by `factor`.
    pub fn test_start(&self, factor: i32) -> i32 {
        (self.minimum - factor).clamp(AXIS_MIN, AXIS_MAX)
    }

    /// Width of the sampled window once terraforming widens it by `factor`.
    pub fn test_width(&self, factor: i32) -> i32 {
        (self.maximum + factor).clamp(AXIS_MIN, AXIS_MAX) - self.test_start(factor)
    }
}

/// One synthetic reading on an axis, plus whatever deviation from the
/// tolerance centre terraforming could not remove.
///
/// Carries no axis label: its position within a sample planet identifies the
/// axis of the catalogue it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentPoint {
    pub value: i32,
    pub terraform_debt: i32,
}

impl EnvironmentPoint {
    pub fn new(value: i32, terraform_debt: i32) -> Self {
        Self {
            value,
            terraform_debt,
        }
    }
}
