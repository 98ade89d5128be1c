//! Habitability scoring engine.
//!
//! A score is built from three passes over a grid of synthetic planets:
//!
//! ```text
//! per-axis samples (sampler)
//!     ↓ cartesian product, last axis fastest
//! sample planets (grid)
//!     ↓ evaluator
//! weighted desirability per planet
//!     ↓ reverse-axis chunked reduction (grid)
//! pass total
//! ```
//!
//! The three pass totals are summed, divided by ten and rounded half up.

pub mod evaluator;
pub mod grid;
pub mod pass;
pub mod sampler;

use serde::Serialize;
use tracing::{debug, trace};

use crate::profile::SpeciesProfile;

pub use evaluator::PlanetEvaluator;
pub use grid::SampleGrid;
pub use pass::Pass;

/// Breakdown of a single scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitabilityReport {
    pub pass_totals: [i64; 3],
    pub total: i64,
    pub score: i64,
}

pub fn score(profile: &SpeciesProfile) -> i64 {
    evaluate(profile).score
}

pub fn evaluate(profile: &SpeciesProfile) -> HabitabilityReport {
    let pass_totals = Pass::ALL.map(|pass| pass_total(profile, pass));
    let total = pass_totals.iter().sum();
    let score = round_total(total);
    debug!(total, score, "habitability scored");
    HabitabilityReport {
        pass_totals,
        total,
        score,
    }
}

pub fn pass_total(profile: &SpeciesProfile, pass: Pass) -> i64 {
    let grid = SampleGrid::build(profile, pass);
    trace!(pass = pass.index(), planets = grid.len(), "built sample grid");
    let evaluator = PlanetEvaluator::new(profile, pass);
    let total = grid.reduce_with(|planet| evaluator.evaluate(planet));
    debug!(pass = pass.index(), total, "pass reduced");
    total
}

/// Divides the accumulated pass totals by ten, rounding halves up.
pub fn round_total(total: i64) -> i64 {
    (total as f64 / 10.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Tolerance;
    use crate::profile::{Axis, AxisCatalogue, AxisUnit};

    fn single(tolerance: Tolerance, total_terraforming: bool) -> SpeciesProfile {
        SpeciesProfile::new(
            AxisCatalogue::new(vec![Axis::new("axis", AxisUnit::Raw)]),
            vec![tolerance],
            total_terraforming,
        )
        .unwrap()
    }

    #[test]
    fn test_round_total_half_up() {
        assert_eq!(round_total(15), 2);
        assert_eq!(round_total(14), 1);
        assert_eq!(round_total(25), 3);
        assert_eq!(round_total(0), 0);
        assert_eq!(round_total(666_072), 66_607);
    }

    #[test]
    fn test_single_immune_axis_breakdown() {
        let report = evaluate(&single(Tolerance::Immune, false));
        assert_eq!(report.pass_totals, [259_028, 185_020, 222_024]);
        assert_eq!(report.total, 666_072);
        assert_eq!(report.score, 66_607);
    }

    #[test]
    fn test_single_open_range() {
        let profile = single(Tolerance::range(0, 100).unwrap(), false);
        assert_eq!(score(&profile), 26_239);
        assert_eq!(evaluate(&profile).total, 262_385);
    }

    #[test]
    fn test_open_range_with_total_terraforming() {
        let profile = single(Tolerance::range(0, 100).unwrap(), true);
        assert_eq!(score(&profile), 28_381);
    }
}
