//! Desirability of a single sample planet.

use crate::environment::{EnvironmentPoint, HabRange, Tolerance};
use crate::profile::SpeciesProfile;

use super::pass::Pass;

/// Starting ideality, and the raw score an immune axis contributes.
pub const IDEAL: i64 = 10_000;

/// Largest penalty a single red axis can add.
pub const RED_PENALTY_CAP: i32 = 15;

/// How one axis of a planet sits against the species' tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisVerdict {
    Immune,
    /// Inside the range. `ideality` is the running multiplier after this axis.
    Green { points: i64, ideality: i64 },
    /// Outside the range.
    Red { penalty: i64 },
}

pub fn classify(tolerance: &Tolerance, value: i32, ideality: i64) -> AxisVerdict {
    match tolerance {
        Tolerance::Immune => AxisVerdict::Immune,
        Tolerance::Range(range) if range.contains(value) => green(range, value, ideality),
        Tolerance::Range(range) => AxisVerdict::Red {
            penalty: i64::from(red_penalty(range, value)),
        },
    }
}

fn green(range: &HabRange, value: i32, ideality: i64) -> AxisVerdict {
    let radius = i64::from(range.radius());
    let distance = i64::from((value - range.centre()).abs());
    let from_ideal = 100 - distance * 100 / radius;
    let poor_planet_mod = distance * 2 - radius;

    let ideality = if poor_planet_mod > 0 {
        ideality * (radius * 2 - poor_planet_mod) / (radius * 2)
    } else {
        ideality
    };

    AxisVerdict::Green {
        points: from_ideal * from_ideal,
        ideality,
    }
}

fn red_penalty(range: &HabRange, value: i32) -> i32 {
    let overshoot = if value > range.maximum() {
        value - range.maximum()
    } else {
        range.minimum() - value
    };
    overshoot.min(RED_PENALTY_CAP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    raw_score: i64,
    ideality: i64,
    red_penalty: i64,
}

impl Tally {
    fn new() -> Self {
        Self {
            raw_score: 0,
            ideality: IDEAL,
            red_penalty: 0,
        }
    }

    fn absorb(self, verdict: AxisVerdict) -> Self {
        match verdict {
            AxisVerdict::Immune => Self {
                raw_score: self.raw_score + IDEAL,
                ..self
            },
            AxisVerdict::Green { points, ideality } => Self {
                raw_score: self.raw_score + points,
                ideality,
                ..self
            },
            AxisVerdict::Red { penalty } => Self {
                red_penalty: self.red_penalty + penalty,
                ..self
            },
        }
    }
}

/// Combined habitability of a planet before terraforming costs.
///
/// Any red axis makes the result the negated total penalty.
pub fn habitability(tolerances: &[Tolerance], planet: &[EnvironmentPoint]) -> i64 {
    let tally = tolerances
        .iter()
        .zip(planet)
        .fold(Tally::new(), |tally, (tolerance, point)| {
            tally.absorb(classify(tolerance, point.value, tally.ideality))
        });

    if tally.red_penalty != 0 {
        return -tally.red_penalty;
    }

    let combined = ((tally.raw_score as f64 / 3.0).sqrt() + 0.9) as i64;
    combined * tally.ideality / IDEAL
}

/// Scores planets for one pass of one profile.
pub struct PlanetEvaluator<'a> {
    tolerances: &'a [Tolerance],
    pass: Pass,
    factor: i64,
}

impl<'a> PlanetEvaluator<'a> {
    pub fn new(profile: &'a SpeciesProfile, pass: Pass) -> Self {
        Self {
            tolerances: profile.tolerances(),
            pass,
            factor: i64::from(pass.terraform_factor(profile.total_terraforming())),
        }
    }

    /// Weighted desirability of `planet`, with uncorrectable terraform debt
    /// charged against it.
    pub fn evaluate(&self, planet: &[EnvironmentPoint]) -> i64 {
        let debt: i64 = planet
            .iter()
            .map(|point| i64::from(point.terraform_debt))
            .sum();

        let mut desirability = habitability(self.tolerances, planet);
        if debt > self.factor {
            desirability = (desirability - (debt - self.factor)).max(0);
        }

        desirability * desirability * self.pass.weight()
    }
}
