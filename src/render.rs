use crate::models::{AnalysisResult, BreakdownEntry};
use serde_json::{Value, json};

pub const SUMMARY_TITLE: &str = "🍽️ Nutrition Summary";
pub const SUGGESTIONS_TITLE: &str = "💡 Suggestions";
pub const BREAKDOWN_BUTTON: &str = "🍛 View Detailed Breakdown";
pub const BREAKDOWN_HEADERS: [&str; 6] = ["Food", "Carbs", "Protein", "Fat", "Fiber", "Sugar"];

pub const MACRO_TITLE: &str = "Macronutrients";
pub const MICRO_TITLE: &str = "Micronutrients";
pub const MACRO_HOLE: f64 = 0.3;

/// `(nutrient key, label, colour)` for each pie slice.
pub const MACRO_FIELDS: [(&str, &str, &str); 3] = [
    ("carbs", "Carbs", "#60a5fa"),
    ("protein", "Protein", "#34d399"),
    ("fat", "Fat", "#f87171"),
];

/// `(nutrient key, label, colour)` for each bar.
pub const MICRO_FIELDS: [(&str, &str, &str); 4] = [
    ("fiber", "Fiber", "#3b82f6"),
    ("sugar", "Sugar", "#f59e0b"),
    ("vitamin_c", "Vitamin C", "#10b981"),
    ("iron", "Iron", "#ef4444"),
];

pub const UNRECOGNISED_LABEL: &str = "Not recognised";

/// Shown for a chart value the response did not carry.
pub const MISSING_VALUE: &str = "n/a";

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientLine {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownTable {
    pub rows: Vec<BreakdownEntry>,
}

impl BreakdownTable {
    pub fn cells(entry: &BreakdownEntry) -> [String; 6] {
        [
            entry.food.clone(),
            format_amount(entry.carbs),
            format_amount(entry.protein),
            format_amount(entry.fat),
            format_amount(entry.fiber),
            format_amount(entry.sugar),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub nutrients: Vec<NutrientLine>,
    /// Present only when the response carried at least one breakdown entry.
    pub breakdown: Option<BreakdownTable>,
    pub unrecognised: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: Option<f64>,
    pub color: &'static str,
}

impl ChartPoint {
    pub fn annotation(&self) -> String {
        self.value
            .map(format_amount)
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub hole: f64,
    pub slices: Vec<ChartPoint>,
}

impl PieChart {
    /// Trace and layout in the shape the page's plotting library expects.
    pub fn spec(&self) -> Value {
        json!({
            "data": [{
                "type": "pie",
                "values": self.slices.iter().map(|s| s.value).collect::<Vec<_>>(),
                "labels": self.slices.iter().map(|s| s.label).collect::<Vec<_>>(),
                "hole": self.hole,
                "marker": { "colors": self.slices.iter().map(|s| s.color).collect::<Vec<_>>() },
            }],
            "layout": { "title": { "text": self.title } },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub bars: Vec<ChartPoint>,
}

impl BarChart {
    pub fn spec(&self) -> Value {
        json!({
            "data": [{
                "type": "bar",
                "x": self.bars.iter().map(|b| b.label).collect::<Vec<_>>(),
                "y": self.bars.iter().map(|b| b.value).collect::<Vec<_>>(),
                "text": self.bars.iter().map(ChartPoint::annotation).collect::<Vec<_>>(),
                "textposition": "auto",
                "marker": { "color": self.bars.iter().map(|b| b.color).collect::<Vec<_>>() },
            }],
            "layout": { "title": { "text": self.title } },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodCard {
    pub food: String,
    pub facts: [(&'static str, f64); 5],
}

impl From<&BreakdownEntry> for FoodCard {
    fn from(entry: &BreakdownEntry) -> Self {
        Self {
            food: entry.food.clone(),
            facts: [
                ("Carbs", entry.carbs),
                ("Protein", entry.protein),
                ("Fat", entry.fat),
                ("Fiber", entry.fiber),
                ("Sugar", entry.sugar),
            ],
        }
    }
}

/// Everything a successful analysis puts on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub summary: SummaryView,
    pub suggestions: Vec<String>,
    pub macro_chart: PieChart,
    pub micro_chart: BarChart,
    pub food_cards: Vec<FoodCard>,
}

impl RenderModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let nutrients = result
            .nutrition
            .iter()
            .map(|(name, value)| NutrientLine {
                name: name.to_string(),
                value,
            })
            .collect();

        let breakdown = (!result.breakdown.is_empty()).then(|| BreakdownTable {
            rows: result.breakdown.clone(),
        });

        let points = |fields: &[(&'static str, &'static str, &'static str)]| -> Vec<ChartPoint> {
            fields
                .iter()
                .map(|&(key, label, color)| ChartPoint {
                    label,
                    value: result.nutrition.get(key),
                    color,
                })
                .collect()
        };

        Self {
            summary: SummaryView {
                nutrients,
                breakdown,
                unrecognised: result.missing.clone(),
            },
            suggestions: result.suggestions.clone(),
            macro_chart: PieChart {
                title: MACRO_TITLE,
                hole: MACRO_HOLE,
                slices: points(&MACRO_FIELDS),
            },
            micro_chart: BarChart {
                title: MICRO_TITLE,
                bars: points(&MICRO_FIELDS),
            },
            food_cards: result.breakdown.iter().map(FoodCard::from).collect(),
        }
    }
}

/// Whole numbers print without a fractional part, like `10` rather than `10.0`.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientTable;

    fn rice() -> BreakdownEntry {
        BreakdownEntry {
            food: "Rice".to_string(),
            carbs: 10.0,
            protein: 2.0,
            fat: 1.0,
            fiber: 0.5,
            sugar: 0.2,
        }
    }

    fn full_nutrition() -> NutrientTable {
        [
            ("carbs", 10.0),
            ("protein", 2.0),
            ("fat", 1.0),
            ("fiber", 0.5),
            ("sugar", 0.2),
            ("vitamin_c", 0.0),
            ("iron", 0.4),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_breakdown_renders_no_table_and_no_cards() {
        let result = AnalysisResult {
            nutrition: full_nutrition(),
            ..AnalysisResult::default()
        };
        let model = RenderModel::from_result(&result);
        assert!(model.summary.breakdown.is_none());
        assert!(model.food_cards.is_empty());
    }

    #[test]
    fn single_entry_gives_one_row_and_one_card() {
        let result = AnalysisResult {
            nutrition: full_nutrition(),
            breakdown: vec![rice()],
            ..AnalysisResult::default()
        };
        let model = RenderModel::from_result(&result);

        let table = model.summary.breakdown.expect("table");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            BreakdownTable::cells(&table.rows[0]),
            ["Rice", "10", "2", "1", "0.5", "0.2"].map(String::from)
        );

        assert_eq!(model.food_cards.len(), 1);
        assert_eq!(model.food_cards[0].food, "Rice");
        assert_eq!(
            model.food_cards[0].facts,
            [("Carbs", 10.0), ("Protein", 2.0), ("Fat", 1.0), ("Fiber", 0.5), ("Sugar", 0.2)]
        );
    }

    #[test]
    fn summary_follows_response_order() {
        let nutrition: NutrientTable = [("iron", 1.0), ("calories", 300.0)].into_iter().collect();
        let result = AnalysisResult {
            nutrition,
            ..AnalysisResult::default()
        };
        let names: Vec<String> = RenderModel::from_result(&result)
            .summary
            .nutrients
            .into_iter()
            .map(|line| line.name)
            .collect();
        assert_eq!(names, vec!["iron", "calories"]);
    }

    #[test]
    fn charts_use_fixed_fields_and_colours() {
        let result = AnalysisResult {
            nutrition: full_nutrition(),
            ..AnalysisResult::default()
        };
        let model = RenderModel::from_result(&result);

        let labels: Vec<&str> = model.macro_chart.slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Carbs", "Protein", "Fat"]);
        assert_eq!(model.macro_chart.slices[2].color, "#f87171");

        let spec = model.micro_chart.spec();
        assert_eq!(spec["data"][0]["x"], json!(["Fiber", "Sugar", "Vitamin C", "Iron"]));
        assert_eq!(spec["data"][0]["text"], json!(["0.5", "0.2", "0", "0.4"]));
        assert_eq!(spec["layout"]["title"]["text"], "Micronutrients");
    }

    #[test]
    fn missing_nutrients_become_gaps() {
        let nutrition: NutrientTable = [("carbs", 5.0)].into_iter().collect();
        let result = AnalysisResult {
            nutrition,
            ..AnalysisResult::default()
        };
        let model = RenderModel::from_result(&result);

        assert_eq!(model.macro_chart.slices[1].value, None);
        let spec = model.micro_chart.spec();
        assert_eq!(spec["data"][0]["y"], json!([null, null, null, null]));
        assert_eq!(spec["data"][0]["text"][0], MISSING_VALUE);
        assert_eq!(model.macro_chart.spec()["data"][0]["values"], json!([5.0, null, null]));
    }
}
