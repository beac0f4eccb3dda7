//! Assembles the final outfit recommendation: temperature band baseline,
//! then condition adjustments, then style substitutions. Total over any
//! finite temperature, any condition string, and any style.

use crate::core::bands::{Baseline, TemperatureBand};
use crate::core::conditions::apply_conditions;
use crate::core::style::apply_style;
use crate::domain::model::{ClothingStyle, OutfitResult};

/// Placeholder entry used when no outerwear item applies.
pub const OUTERWEAR_SENTINEL: &str = "None needed";

pub fn recommend(temperature_celsius: f64, conditions: &str, style: ClothingStyle) -> OutfitResult {
    let band = TemperatureBand::classify(temperature_celsius);
    let Baseline {
        mut base_outfit,
        mut outerwear,
        mut accessories,
    } = band.baseline();

    apply_conditions(conditions, &mut outerwear, &mut accessories);
    apply_style(style, &mut base_outfit);

    // The sentinel goes in after condition adjustments, so a hot rainy day
    // still gets its raincoat instead of "None needed".
    if outerwear.is_empty() {
        outerwear.push(OUTERWEAR_SENTINEL.to_string());
    }

    OutfitResult {
        base_outfit,
        outerwear,
        accessories,
        recommendation: format!(
            "For {} weather at {:.1}°C",
            conditions.to_lowercase(),
            temperature_celsius
        ),
    }
}
