use super::presets::RoastLevel;

pub const GRIND: &str = "Coarse (Baratza 30-35)";
pub const METHOD: &str = "Room temp or fridge";
pub const STRAIN: &str = "Double strain for clarity";

pub const SERVING_TIPS: [&str; 4] = [
    "Add concentrate first, then water",
    "Stir gently before adding nitrogen",
    "Chill concentrate for best results",
    "Adjust ratio to taste next time",
];

/// 추출 안내 한 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewingInstructions {
    pub grind: &'static str,
    pub steep_time: String,
    pub method: &'static str,
    pub strain: &'static str,
    pub roast_note: &'static str,
}

pub fn brewing_instructions(roast: RoastLevel) -> BrewingInstructions {
    let adj = roast.adjustment();
    BrewingInstructions {
        grind: GRIND,
        steep_time: format!("{} hours", adj.steep_time_hours),
        method: METHOD,
        strain: STRAIN,
        roast_note: adj.notes,
    }
}
