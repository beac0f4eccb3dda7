//! Condition-keyword adjustments. Each rule is tested independently against
//! the lowercased condition string, so a string like "Snow and Wind" fires
//! more than one rule. Rules only ever append; band items are never removed.

const RAIN_OUTERWEAR: &[&str] = &["Raincoat", "Umbrella", "Waterproof shoes"];
const RAIN_ACCESSORIES: &[&str] = &["Waterproof bag"];

const SNOW_OUTERWEAR: &[&str] = &["Snow boots", "Waterproof gloves"];
const SNOW_ACCESSORIES: &[&str] = &["Ice scraper", "Traction cleats"];

const WIND_ACCESSORIES: &[&str] = &["Windproof jacket", "Secure hat"];

fn push_all(target: &mut Vec<String>, items: &[&str]) {
    target.extend(items.iter().map(|s| s.to_string()));
}

pub fn apply_conditions(conditions: &str, outerwear: &mut Vec<String>, accessories: &mut Vec<String>) {
    let lowered = conditions.to_lowercase();

    if lowered.contains("rain") {
        push_all(outerwear, RAIN_OUTERWEAR);
        push_all(accessories, RAIN_ACCESSORIES);
    }

    if lowered.contains("snow") {
        push_all(outerwear, SNOW_OUTERWEAR);
        push_all(accessories, SNOW_ACCESSORIES);
    }

    if lowered.contains("wind") {
        push_all(accessories, WIND_ACCESSORIES);
    }
}
