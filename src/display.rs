//! Human-readable rendering of axis values. Presentation only; scoring never
//! calls into this module.

use crate::environment::Tolerance;
use crate::profile::{Axis, AxisUnit};

pub fn format_value(unit: AxisUnit, value: i32) -> String {
    match unit {
        AxisUnit::Gravity => {
            let gravity = 4f64.powf((f64::from(value) - 50.0) / 50.0);
            format!("{gravity:.2}g")
        }
        AxisUnit::Temperature => format!("{}ºC", (value - 50) * 4),
        AxisUnit::Radiation => format!("{value}mR"),
        AxisUnit::Raw => value.to_string(),
    }
}

pub fn describe_tolerance(axis: &Axis, tolerance: &Tolerance) -> String {
    match tolerance {
        Tolerance::Immune => "Immune".to_string(),
        Tolerance::Range(range) => format!(
            "{} to {}",
            format_value(axis.unit, range.minimum()),
            format_value(axis.unit, range.maximum())
        ),
    }
}
