/// Discrete outfit baseline derived from the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Cool,
    Warm,
    Hot,
}

/// Garment lists a band starts from, before condition and style adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub base_outfit: Vec<String>,
    pub outerwear: Vec<String>,
    pub accessories: Vec<String>,
}

const HOT_BASE: &[&str] = &["T-shirt", "Shorts", "Sandals"];
const HOT_ACCESSORIES: &[&str] = &["Sunglasses", "Sun hat", "Sunscreen"];

const WARM_BASE: &[&str] = &["T-shirt", "Jeans or light pants", "Sneakers"];
const WARM_ACCESSORIES: &[&str] = &["Light jacket (optional)", "Cap"];

const COOL_BASE: &[&str] = &["Long-sleeve shirt", "Jeans", "Closed shoes"];
const COOL_OUTERWEAR: &[&str] = &["Light jacket", "Sweater"];
const COOL_ACCESSORIES: &[&str] = &["Scarf (optional)"];

const COLD_BASE: &[&str] = &["Thermal underwear", "Sweater", "Warm pants"];
const COLD_OUTERWEAR: &[&str] = &["Winter jacket", "Gloves", "Beanie"];
const COLD_ACCESSORIES: &[&str] = &["Scarf", "Warm socks"];

const FREEZING_BASE: &[&str] = &["Thermal layers", "Fleece jacket", "Insulated pants"];
const FREEZING_OUTERWEAR: &[&str] = &["Heavy winter coat", "Insulated gloves", "Winter hat"];
const FREEZING_ACCESSORIES: &[&str] = &["Thermal socks", "Face mask", "Hand warmers"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl TemperatureBand {
    /// Cutoffs are checked hottest-first; each `>` comparison only applies
    /// once the warmer bands have been ruled out.
    pub fn classify(celsius: f64) -> Self {
        if celsius > 25.0 {
            Self::Hot
        } else if celsius > 18.0 {
            Self::Warm
        } else if celsius > 10.0 {
            Self::Cool
        } else if celsius > 0.0 {
            Self::Cold
        } else {
            Self::Freezing
        }
    }

    pub fn baseline(&self) -> Baseline {
        match self {
            Self::Hot => Baseline {
                base_outfit: owned(HOT_BASE),
                outerwear: Vec::new(),
                accessories: owned(HOT_ACCESSORIES),
            },
            Self::Warm => Baseline {
                base_outfit: owned(WARM_BASE),
                outerwear: Vec::new(),
                accessories: owned(WARM_ACCESSORIES),
            },
            Self::Cool => Baseline {
                base_outfit: owned(COOL_BASE),
                outerwear: owned(COOL_OUTERWEAR),
                accessories: owned(COOL_ACCESSORIES),
            },
            Self::Cold => Baseline {
                base_outfit: owned(COLD_BASE),
                outerwear: owned(COLD_OUTERWEAR),
                accessories: owned(COLD_ACCESSORIES),
            },
            Self::Freezing => Baseline {
                base_outfit: owned(FREEZING_BASE),
                outerwear: owned(FREEZING_OUTERWEAR),
                accessories: owned(FREEZING_ACCESSORIES),
            },
        }
    }
}
