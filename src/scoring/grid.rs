//! Sample planets for one pass, and the weighted reduction of their scores.
//!
//! Planets are laid out as the cartesian product of the per-axis samples with
//! the last axis varying fastest. The reduction walks the axes in reverse and
//! collapses one axis per step, which is only correct for that exact layout,
//! so both live on [`SampleGrid`] and the scores never leave it.

use crate::environment::{EnvironmentPoint, Tolerance};
use crate::profile::SpeciesProfile;

use super::pass::Pass;
use super::sampler::{sample, SAMPLES_PER_RANGE};

/// Scale applied to an immune axis so its single sample weighs as much as a
/// full ranged chunk.
const IMMUNE_WEIGHT: i64 = SAMPLES_PER_RANGE as i64;

pub struct SampleGrid<'a> {
    tolerances: &'a [Tolerance],
    factor: i32,
    planets: Vec<Vec<EnvironmentPoint>>,
}

impl<'a> SampleGrid<'a> {
    pub fn build(profile: &'a SpeciesProfile, pass: Pass) -> Self {
        let total_terraforming = profile.total_terraforming();
        let mut planets: Vec<Vec<EnvironmentPoint>> = vec![Vec::new()];
        for tolerance in profile.tolerances() {
            let column = sample(tolerance, pass, total_terraforming);
            planets = planets
                .iter()
                .flat_map(|prefix| {
                    column.iter().map(move |point| {
                        let mut planet = Vec::with_capacity(prefix.len() + 1);
                        planet.extend_from_slice(prefix);
                        planet.push(*point);
                        planet
                    })
                })
                .collect();
        }

        Self {
            tolerances: profile.tolerances(),
            factor: pass.terraform_factor(total_terraforming),
            planets,
        }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn planets(&self) -> impl Iterator<Item = &[EnvironmentPoint]> {
        self.planets.iter().map(Vec::as_slice)
    }

    /// Scores every planet with `evaluate` and folds the results into the
    /// pass total.
    pub fn reduce_with<F>(&self, mut evaluate: F) -> i64
    where
        F: FnMut(&[EnvironmentPoint]) -> i64,
    {
        let mut level: Vec<i64> = self.planets().map(&mut evaluate).collect();

        for tolerance in self.tolerances.iter().rev() {
            level = match tolerance {
                Tolerance::Range(range) => {
                    let width = i64::from(range.test_width(self.factor));
                    level
                        .chunks(SAMPLES_PER_RANGE)
                        .map(|chunk| chunk.iter().sum::<i64>() * width / 100)
                        .collect()
                }
                Tolerance::Immune => level.into_iter().map(|x| x * IMMUNE_WEIGHT).collect(),
            };
        }

        debug_assert_eq!(level.len(), 1);
        level.into_iter().sum()
    }
}
