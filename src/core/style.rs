//! Style substitutions over the base outfit. Each style carries an explicit
//! ordered rule list; the first rule whose needle is contained in an item
//! wins, and at most one substitution applies per item. Outerwear and
//! accessories are never touched here.

use crate::domain::model::ClothingStyle;

type StyleRule = (&'static str, &'static str);

const FORMAL_RULES: &[StyleRule] = &[
    ("T-shirt", "Dress shirt"),
    ("Shorts", "Dress pants"),
    ("Sneakers", "Dress shoes"),
    ("Jeans", "Chinos or slacks"),
];

const SPORTY_RULES: &[StyleRule] = &[
    ("T-shirt", "Athletic shirt"),
    ("Jeans", "Athletic pants"),
    ("Sneakers", "Running shoes"),
];

pub fn apply_style(style: ClothingStyle, base_outfit: &mut Vec<String>) {
    let rules: &[StyleRule] = match style {
        ClothingStyle::Formal => FORMAL_RULES,
        ClothingStyle::Sporty => SPORTY_RULES,
        // casual, business, and outdoor keep the band's garments as-is
        ClothingStyle::Casual | ClothingStyle::Business | ClothingStyle::Outdoor => return,
    };

    for item in base_outfit.iter_mut() {
        if let Some((_, replacement)) = rules.iter().find(|(needle, _)| item.contains(needle)) {
            *item = replacement.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warm_base() -> Vec<String> {
        vec![
            "T-shirt".to_string(),
            "Jeans or light pants".to_string(),
            "Sneakers".to_string(),
        ]
    }

    #[test]
    fn formal_rewrites_all_warm_items() {
        let mut outfit = warm_base();
        apply_style(ClothingStyle::Formal, &mut outfit);
        assert_eq!(outfit, vec!["Dress shirt", "Chinos or slacks", "Dress shoes"]);
    }

    #[test]
    fn sporty_rewrites_by_substring() {
        let mut outfit = warm_base();
        apply_style(ClothingStyle::Sporty, &mut outfit);
        assert_eq!(outfit, vec!["Athletic shirt", "Athletic pants", "Running shoes"]);
    }

    #[test]
    fn unmatched_items_pass_through() {
        let mut outfit = vec!["Thermal underwear".to_string(), "Sweater".to_string()];
        apply_style(ClothingStyle::Formal, &mut outfit);
        assert_eq!(outfit, vec!["Thermal underwear", "Sweater"]);
    }

    #[test]
    fn casual_business_outdoor_are_identity() {
        for style in [
            ClothingStyle::Casual,
            ClothingStyle::Business,
            ClothingStyle::Outdoor,
        ] {
            let mut outfit = warm_base();
            apply_style(style, &mut outfit);
            assert_eq!(outfit, warm_base());
        }
    }
}
