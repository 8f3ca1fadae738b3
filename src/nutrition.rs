use crate::models::{AnalysisResult, BreakdownEntry, NutrientTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum similarity for a typed item to be corrected to a catalog name.
pub const MATCH_CUTOFF: f32 = 0.6;

pub const PROTEIN_TARGET: f64 = 20.0;
pub const FIBER_TARGET: f64 = 10.0;
pub const VITAMIN_C_TARGET: f64 = 15.0;

pub const PROTEIN_SUGGESTION: &str = "Add protein-rich foods like dal, paneer, or chicken.";
pub const FIBER_SUGGESTION: &str = "Include fiber-rich veggies or fruits.";
pub const VITAMIN_C_SUGGESTION: &str = "Add vitamin C sources like guava, orange, or capsicum.";

/// Per-serving nutrients for one food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub vitamin_c: f64,
    pub iron: f64,
}

impl FoodProfile {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
        sugar: f64,
        vitamin_c: f64,
        iron: f64,
    ) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            vitamin_c,
            iron,
        }
    }

    fn accumulate(&mut self, other: &FoodProfile) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
        self.vitamin_c += other.vitamin_c;
        self.iron += other.iron;
    }

    /// Nutrients in the order the analysis endpoint reports them.
    pub fn to_table(&self) -> NutrientTable {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("vitamin_c", self.vitamin_c),
            ("iron", self.iron),
        ]
        .into_iter()
        .map(|(name, value)| (name, round2(value)))
        .collect()
    }

    fn breakdown_entry(&self, food: &str) -> BreakdownEntry {
        BreakdownEntry {
            food: food.to_string(),
            carbs: self.carbs,
            protein: self.protein,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
        }
    }
}

const BUILTIN_FOODS: &[(&str, FoodProfile)] = &[
    ("idli", FoodProfile::new(78.0, 2.0, 16.0, 0.4, 0.8, 0.2, 0.0, 0.5)),
    ("dosa", FoodProfile::new(168.0, 3.9, 29.0, 3.7, 0.9, 0.4, 0.0, 0.8)),
    ("sambar", FoodProfile::new(130.0, 6.0, 18.0, 4.0, 5.0, 3.5, 12.0, 1.5)),
    ("curd rice", FoodProfile::new(210.0, 6.5, 34.0, 5.5, 1.2, 4.0, 1.0, 0.6)),
    ("upma", FoodProfile::new(190.0, 4.5, 30.0, 6.0, 2.5, 1.5, 2.0, 1.2)),
    ("vada", FoodProfile::new(145.0, 4.8, 15.0, 7.5, 2.0, 0.6, 0.5, 1.1)),
    ("pongal", FoodProfile::new(220.0, 6.0, 33.0, 7.0, 2.0, 0.5, 0.0, 1.3)),
    ("coconut chutney", FoodProfile::new(90.0, 1.0, 4.0, 8.0, 2.0, 1.5, 1.0, 0.4)),
    ("chapati", FoodProfile::new(120.0, 3.1, 18.0, 3.7, 2.8, 0.4, 0.0, 0.9)),
    ("rice", FoodProfile::new(205.0, 4.3, 45.0, 0.4, 0.6, 0.1, 0.0, 0.4)),
    ("dal", FoodProfile::new(198.0, 12.0, 30.0, 3.0, 8.0, 2.0, 3.0, 3.3)),
    ("paneer", FoodProfile::new(265.0, 18.0, 3.6, 20.0, 0.0, 2.6, 0.0, 0.2)),
    ("chicken curry", FoodProfile::new(240.0, 25.0, 6.0, 13.0, 1.5, 2.5, 5.0, 1.4)),
    ("egg", FoodProfile::new(78.0, 6.3, 0.6, 5.3, 0.0, 0.6, 0.0, 0.9)),
    ("guava", FoodProfile::new(68.0, 2.6, 14.0, 1.0, 5.4, 9.0, 228.0, 0.3)),
    ("orange", FoodProfile::new(62.0, 1.2, 15.4, 0.2, 3.1, 12.2, 70.0, 0.1)),
    ("banana", FoodProfile::new(105.0, 1.3, 27.0, 0.4, 3.1, 14.0, 10.3, 0.3)),
    ("capsicum", FoodProfile::new(24.0, 1.0, 5.5, 0.2, 2.0, 3.0, 95.0, 0.4)),
    ("filter coffee", FoodProfile::new(70.0, 2.5, 9.0, 2.5, 0.0, 8.0, 0.0, 0.1)),
];

/// Foods the analysis endpoint can recognise, keyed by lowercase name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    foods: BTreeMap<String, FoodProfile>,
}

impl FoodCatalog {
    pub fn builtin() -> Self {
        BUILTIN_FOODS
            .iter()
            .map(|(name, profile)| (name.to_string(), *profile))
            .collect()
    }

    /// Parses a JSON object of `name -> profile`; names are lowercased.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        let foods: BTreeMap<String, FoodProfile> = serde_json::from_slice(bytes)?;
        Ok(foods.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FoodProfile> {
        self.foods.get(name)
    }

    /// Closest catalog name for `item` by Ratcliff/Obershelp ratio, or `None`
    /// when nothing clears [`MATCH_CUTOFF`]. Ties keep the alphabetically last
    /// name.
    pub fn correct_name(&self, item: &str) -> Option<&str> {
        let item = item.to_lowercase();
        if let Some((name, _)) = self.foods.get_key_value(&item) {
            return Some(name.as_str());
        }

        // get_close_matches sorts stably, so descending order settles ties.
        let names: Vec<&str> = self.foods.keys().rev().map(String::as_str).collect();
        difflib::get_close_matches(&item, names, 1, MATCH_CUTOFF)
            .into_iter()
            .next()
    }

    /// Totals, per-food breakdown and suggestions for a comma-separated meal.
    pub fn analyze(&self, meal: &str) -> AnalysisResult {
        let meal = meal.to_lowercase();
        let mut totals = FoodProfile::default();
        let mut breakdown = Vec::new();
        let mut missing = Vec::new();

        for item in meal.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            match self.correct_name(item) {
                Some(name) => {
                    let profile = &self.foods[name];
                    totals.accumulate(profile);
                    breakdown.push(profile.breakdown_entry(name));
                }
                None => missing.push(item.to_string()),
            }
        }

        AnalysisResult {
            nutrition: totals.to_table(),
            breakdown,
            suggestions: suggestions_for(&totals),
            missing,
        }
    }
}

impl FromIterator<(String, FoodProfile)> for FoodCatalog {
    fn from_iter<I: IntoIterator<Item = (String, FoodProfile)>>(iter: I) -> Self {
        Self {
            foods: iter
                .into_iter()
                .map(|(name, profile)| (name.to_lowercase(), profile))
                .collect(),
        }
    }
}

fn suggestions_for(totals: &FoodProfile) -> Vec<String> {
    let mut suggestions = Vec::new();
    if totals.protein < PROTEIN_TARGET {
        suggestions.push(PROTEIN_SUGGESTION.to_string());
    }
    if totals.fiber < FIBER_TARGET {
        suggestions.push(FIBER_SUGGESTION.to_string());
    }
    if totals.vitamin_c < VITAMIN_C_TARGET {
        suggestions.push(VITAMIN_C_SUGGESTION.to_string());
    }
    suggestions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_known_meals() {
        let catalog = FoodCatalog::builtin();
        for meal in crate::suggest::KNOWN_MEALS {
            assert!(
                catalog.get(&meal.to_lowercase()).is_some(),
                "missing {meal}"
            );
        }
    }

    #[test]
    fn correct_name_fixes_typos_and_rejects_noise() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.correct_name("idly"), Some("idli"));
        assert_eq!(catalog.correct_name("Sambhar"), Some("sambar"));
        assert_eq!(catalog.correct_name("curd rise"), Some("curd rice"));
        assert_eq!(catalog.correct_name("pizza"), None);
    }

    #[test]
    fn correct_name_expands_partial_names() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.correct_name("chicken"), Some("chicken curry"));
        assert_eq!(catalog.correct_name("coffee"), Some("filter coffee"));
        assert_eq!(catalog.correct_name("chutney"), Some("coconut chutney"));
        assert_eq!(catalog.correct_name("curd"), Some("curd rice"));

        let result = catalog.analyze("idli, chicken, coffee");
        assert!(result.missing.is_empty(), "{:?}", result.missing);
        let foods: Vec<&str> = result.breakdown.iter().map(|e| e.food.as_str()).collect();
        assert_eq!(foods, vec!["idli", "chicken curry", "filter coffee"]);
    }

    #[test]
    fn correct_name_ties_go_to_the_last_name() {
        let catalog: FoodCatalog = ["abcd", "abce"]
            .into_iter()
            .map(|name| (name.to_string(), FoodProfile::default()))
            .collect();
        assert_eq!(catalog.correct_name("abc"), Some("abce"));
        assert_eq!(catalog.correct_name("da"), None);
    }

    #[test]
    fn analyze_sums_recognised_items_and_lists_missing() {
        let catalog = FoodCatalog::builtin();
        let result = catalog.analyze("Idly, sambar, pizza,");

        let idli = catalog.get("idli").unwrap();
        let sambar = catalog.get("sambar").unwrap();
        assert_eq!(
            result.nutrition.get("carbs"),
            Some(round2(idli.carbs + sambar.carbs))
        );
        assert_eq!(
            result.nutrition.get("iron"),
            Some(round2(idli.iron + sambar.iron))
        );
        assert_eq!(result.missing, vec!["pizza".to_string()]);

        let foods: Vec<&str> = result.breakdown.iter().map(|e| e.food.as_str()).collect();
        assert_eq!(foods, vec!["idli", "sambar"]);
    }

    #[test]
    fn nutrition_keys_follow_endpoint_order() {
        let result = FoodCatalog::builtin().analyze("dosa");
        let keys: Vec<&str> = result.nutrition.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["calories", "protein", "carbs", "fat", "fiber", "sugar", "vitamin_c", "iron"]
        );
    }

    #[test]
    fn suggestions_follow_thresholds_in_order() {
        let catalog = FoodCatalog::builtin();

        let light = catalog.analyze("idli");
        assert_eq!(
            light.suggestions,
            vec![PROTEIN_SUGGESTION, FIBER_SUGGESTION, VITAMIN_C_SUGGESTION]
        );

        let balanced = catalog.analyze("chicken curry, dal, guava");
        assert!(balanced.suggestions.is_empty(), "{:?}", balanced.suggestions);
    }

    #[test]
    fn unknown_only_meal_yields_zero_totals() {
        let result = FoodCatalog::builtin().analyze("xyzzy");
        assert!(result.breakdown.is_empty());
        assert_eq!(result.nutrition.get("calories"), Some(0.0));
        assert_eq!(result.missing, vec!["xyzzy".to_string()]);
    }

    #[test]
    fn catalog_deserializes_from_plain_map() {
        let raw = r#"{"Ragi Mudde": {"calories": 100, "protein": 3}}"#;
        let catalog = FoodCatalog::from_json(raw.as_bytes()).unwrap();
        let profile = catalog.get("ragi mudde").unwrap();
        assert_eq!(profile.protein, 3.0);
        assert_eq!(profile.iron, 0.0);
    }
}
