use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::environment::Tolerance;
use crate::profile::{Axis, AxisCatalogue, AxisUnit, ProfileError, SpeciesProfile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileConfigError {
    #[error("axis '{axis}' needs both min and max unless it is immune")]
    MissingBounds { axis: String },
    #[error("axis '{axis}' is immune and must not set min or max")]
    ImmuneWithBounds { axis: String },
    #[error("axis '{axis}': {source}")]
    Axis {
        axis: String,
        #[source]
        source: ProfileError,
    },
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// A species profile as written in a YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub total_terraforming: bool,
    pub axes: Vec<AxisConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub name: String,
    #[serde(default)]
    pub unit: AxisUnit,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub immune: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl AxisConfig {
    fn tolerance(&self) -> Result<Tolerance, ProfileConfigError> {
        match (self.immune, self.min, self.max) {
            (true, None, None) => Ok(Tolerance::Immune),
            (true, _, _) => Err(ProfileConfigError::ImmuneWithBounds {
                axis: self.name.clone(),
            }),
            (false, Some(min), Some(max)) => {
                Tolerance::range(min, max).map_err(|source| ProfileConfigError::Axis {
                    axis: self.name.clone(),
                    source,
                })
            }
            (false, _, _) => Err(ProfileConfigError::MissingBounds {
                axis: self.name.clone(),
            }),
        }
    }
}

impl ProfileConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse species profile")
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize species profile")
    }

    pub fn build_profile(&self) -> Result<SpeciesProfile, ProfileConfigError> {
        let tolerances = self
            .axes
            .iter()
            .map(AxisConfig::tolerance)
            .collect::<Result<Vec<_>, _>>()?;
        let catalogue = AxisCatalogue::new(
            self.axes
                .iter()
                .map(|axis| Axis::new(axis.name.clone(), axis.unit))
                .collect(),
        );
        Ok(SpeciesProfile::new(
            catalogue,
            tolerances,
            self.total_terraforming,
        )?)
    }

    /// Describes an existing profile in file form, e.g. to seed a new file
    /// from a preset.
    pub fn from_profile(name: impl Into<String>, profile: &SpeciesProfile) -> Self {
        let axes = profile
            .axes()
            .map(|(axis, tolerance)| {
                let (min, max) = match tolerance {
                    Tolerance::Immune => (None, None),
                    Tolerance::Range(range) => (Some(range.minimum()), Some(range.maximum())),
                };
                AxisConfig {
                    name: axis.name.clone(),
                    unit: axis.unit,
                    immune: tolerance.is_immune(),
                    min,
                    max,
                }
            })
            .collect();
        Self {
            name: name.into(),
            description: None,
            total_terraforming: profile.total_terraforming(),
            axes,
        }
    }
}

pub struct ProfileLoader {
    base_dir: PathBuf,
}

impl ProfileLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<ProfileConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let config: ProfileConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Loads and validates in one step.
    pub fn load_profile(&self, file: impl AsRef<Path>) -> Result<(ProfileConfig, SpeciesProfile)> {
        let file = file.as_ref();
        let config = self.load(file)?;
        let profile = config
            .build_profile()
            .with_context(|| format!("Invalid species profile in {}", file.display()))?;
        Ok((config, profile))
    }
}
