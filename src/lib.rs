pub mod config;
pub mod display;
pub mod environment;
pub mod logging;
pub mod presets;
pub mod profile;
pub mod scoring;

pub use config::{ProfileConfig, ProfileLoader};
pub use environment::{EnvironmentPoint, HabRange, Tolerance};
pub use profile::{Axis, AxisCatalogue, AxisUnit, ProfileError, SpeciesProfile};
pub use scoring::{evaluate, score, HabitabilityReport, Pass};
