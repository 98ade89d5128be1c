//! Discretizes one axis tolerance into representative readings.

use crate::environment::{EnvironmentPoint, HabRange, Tolerance, IMMUNE_SAMPLE};

use super::pass::Pass;

/// Readings taken across every ranged axis.
pub const SAMPLES_PER_RANGE: usize = 11;

/// Samples `tolerance` for `pass`.
///
/// Ranged axes yield [`SAMPLES_PER_RANGE`] evenly spaced readings across the
/// tolerance window widened by the pass's terraforming factor. Outside the
/// baseline pass each reading is pulled towards the centre by up to that
/// factor, and whatever cannot be corrected is reported as terraform debt.
/// Immune axes yield a single neutral reading.
pub fn sample(
    tolerance: &Tolerance,
    pass: Pass,
    total_terraforming: bool,
) -> Vec<EnvironmentPoint> {
    match tolerance {
        Tolerance::Immune => vec![EnvironmentPoint::new(IMMUNE_SAMPLE, 0)],
        Tolerance::Range(range) => {
            sample_range(range, pass, pass.terraform_factor(total_terraforming))
        }
    }
}

fn sample_range(range: &HabRange, pass: Pass, factor: i32) -> Vec<EnvironmentPoint> {
    let start = range.test_start(factor);
    let width = range.test_width(factor);
    let steps = (SAMPLES_PER_RANGE - 1) as i32;

    (0..SAMPLES_PER_RANGE as i32)
        .map(|i| {
            let raw = start + width * i / steps;
            if pass.is_baseline() {
                EnvironmentPoint::new(raw, 0)
            } else {
                terraform_towards_centre(range.centre(), raw, factor)
            }
        })
        .collect()
}

fn terraform_towards_centre(centre: i32, raw: i32, factor: i32) -> EnvironmentPoint {
    let offset = centre - raw;
    let debt = if offset.abs() < factor {
        0
    } else if offset < 0 {
        offset + factor
    } else {
        offset - factor
    };
    EnvironmentPoint::new(centre - debt, debt)
}
