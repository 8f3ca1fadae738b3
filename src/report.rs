use crate::page::{Page, Region, RegionContent};
use crate::render::{
    BREAKDOWN_HEADERS, BreakdownTable, ChartPoint, FoodCard, SummaryView, UNRECOGNISED_LABEL,
    format_amount,
};
use std::fmt::Write;

/// Plain-text rendering of the page for the terminal.
pub fn format_page(page: &Page) -> String {
    let mut out = String::new();
    for (region, content) in page.regions() {
        let section = match content {
            RegionContent::Empty => continue,
            RegionContent::Notice(notice) => notice.text.clone(),
            RegionContent::Summary(summary) => format_summary(summary, page.breakdown_visible()),
            RegionContent::Suggestions(items) => format_list("Suggestions", items),
            RegionContent::Pie(chart) => format_points(chart.title, &chart.slices),
            RegionContent::Bar(chart) => format_points(chart.title, &chart.bars),
            RegionContent::FoodCards(cards) => format_cards(cards),
        };
        if region != Region::Summary {
            out.push('\n');
        }
        out.push_str(&section);
    }
    out
}

fn format_summary(summary: &SummaryView, show_breakdown: bool) -> String {
    let mut out = String::from("=== Nutrition Summary ===\n");
    let width = summary
        .nutrients
        .iter()
        .map(|line| line.name.len())
        .max()
        .unwrap_or(0);
    for line in &summary.nutrients {
        let _ = writeln!(out, "  {:<width$}  {}", line.name, format_amount(line.value));
    }
    if !summary.unrecognised.is_empty() {
        let _ = writeln!(out, "  {UNRECOGNISED_LABEL}: {}", summary.unrecognised.join(", "));
    }
    match &summary.breakdown {
        Some(table) if show_breakdown => out.push_str(&format_table(table)),
        Some(table) => {
            let count = table.rows.len();
            let noun = if count == 1 { "food" } else { "foods" };
            let _ = writeln!(out, "  ({count} {noun} in breakdown, use --breakdown)");
        }
        None => {}
    }
    out
}

fn format_table(table: &BreakdownTable) -> String {
    let rows: Vec<[String; 6]> = table.rows.iter().map(BreakdownTable::cells).collect();
    let mut widths = BREAKDOWN_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::from("\n");
    let header: Vec<String> = BREAKDOWN_HEADERS
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "  {}", header.join(" | "));
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "  {}", line.join(" | "));
    }
    out
}

fn format_list(title: &str, items: &[String]) -> String {
    let mut out = format!("=== {title} ===\n");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
    out
}

fn format_points(title: &str, points: &[ChartPoint]) -> String {
    let mut out = format!("=== {title} ===\n");
    for point in points {
        let _ = writeln!(out, "  {:<10} {}", point.label, point.annotation());
    }
    out
}

fn format_cards(cards: &[FoodCard]) -> String {
    let mut out = String::from("=== Foods ===\n");
    for card in cards {
        let facts: Vec<String> = card
            .facts
            .iter()
            .map(|(label, value)| format!("{label} {}", format_amount(*value)))
            .collect();
        let _ = writeln!(out, "  {}: {}", card.food, facts.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, BreakdownEntry};
    use crate::page::Notice;
    use crate::render::RenderModel;

    fn rendered() -> Page {
        let mut page = Page::new();
        page.render(RenderModel::from_result(&AnalysisResult {
            nutrition: [("carbs", 10.0), ("iron", 0.4)].into_iter().collect(),
            breakdown: vec![BreakdownEntry {
                food: "Rice".to_string(),
                carbs: 10.0,
                protein: 2.0,
                fat: 1.0,
                fiber: 0.5,
                sugar: 0.2,
            }],
            suggestions: vec!["Include fiber-rich veggies or fruits.".to_string()],
            missing: Vec::new(),
        }));
        page
    }

    #[test]
    fn collapsed_breakdown_is_only_mentioned() {
        let text = format_page(&rendered());
        assert!(text.starts_with("=== Nutrition Summary ===\n"));
        assert!(text.contains("  carbs  10\n"));
        assert!(text.contains("(1 food in breakdown, use --breakdown)"));
        assert!(text.contains("  - Include fiber-rich veggies or fruits."));
        assert!(text.contains("  Protein    n/a"));
        assert!(text.contains("  Rice: Carbs 10, Protein 2, Fat 1, Fiber 0.5, Sugar 0.2"));
    }

    #[test]
    fn collapsed_breakdown_counts_several_foods() {
        let entry = |food: &str| BreakdownEntry {
            food: food.to_string(),
            carbs: 1.0,
            protein: 1.0,
            fat: 1.0,
            fiber: 1.0,
            sugar: 1.0,
        };
        let mut page = Page::new();
        page.render(RenderModel::from_result(&AnalysisResult {
            nutrition: [("carbs", 2.0)].into_iter().collect(),
            breakdown: vec![entry("idli"), entry("dosa")],
            suggestions: Vec::new(),
            missing: Vec::new(),
        }));
        assert!(format_page(&page).contains("(2 foods in breakdown, use --breakdown)"));
    }

    #[test]
    fn expanded_breakdown_prints_table() {
        let mut page = rendered();
        page.toggle_breakdown();
        let text = format_page(&page);
        assert!(text.contains("Food | Carbs | Protein | Fat | Fiber | Sugar"));
        assert!(text.contains("Rice | 10    | 2       | 1   | 0.5   | 0.2"));
    }

    #[test]
    fn notice_only_page() {
        let mut page = Page::new();
        page.show_notice(Notice::error("❌ Error: Failed to fetch results"));
        assert_eq!(format_page(&page), "❌ Error: Failed to fetch results");
    }
}
