//! Built-in species profiles over the standard gravity/temperature/radiation
//! catalogue.

use clap::ValueEnum;

use crate::environment::Tolerance;
use crate::profile::{Axis, AxisCatalogue, AxisUnit, ProfileError, SpeciesProfile};

pub fn standard_catalogue() -> AxisCatalogue {
    AxisCatalogue::new(vec![
        Axis::new("Gravity", AxisUnit::Gravity),
        Axis::new("Temperature", AxisUnit::Temperature),
        Axis::new("Radiation", AxisUnit::Radiation),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Moderate tolerance on every axis.
    Humanoid,
    /// Humanoid gravity, immune to temperature, narrow radiation band.
    HumanoidImmuneTemp,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Humanoid => "humanoid",
            Preset::HumanoidImmuneTemp => "humanoid-immune-temp",
        }
    }

    pub fn profile(self) -> Result<SpeciesProfile, ProfileError> {
        let tolerances = match self {
            Preset::Humanoid => vec![
                Tolerance::range(15, 85)?,
                Tolerance::range(15, 85)?,
                Tolerance::range(15, 85)?,
            ],
            Preset::HumanoidImmuneTemp => vec![
                Tolerance::range(15, 85)?,
                Tolerance::Immune,
                Tolerance::range(35, 65)?,
            ],
        };
        SpeciesProfile::new(standard_catalogue(), tolerances, false)
    }
}
