use crate::page::{Notice, NoticeKind, Region, RegionContent};
use crate::render::{
    BREAKDOWN_BUTTON, BREAKDOWN_HEADERS, BreakdownTable, FoodCard, SUGGESTIONS_TITLE,
    SUMMARY_TITLE, SummaryView, UNRECOGNISED_LABEL, format_amount,
};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// Element id of the breakdown container inside the summary region.
pub const BREAKDOWN_BOX_ID: &str = "breakdownBox";

/// Region markup and chart specs for the page script.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewResponse {
    pub regions: serde_json::Map<String, Value>,
    pub charts: serde_json::Map<String, Value>,
}

impl ViewResponse {
    pub fn from_regions<'a>(regions: impl IntoIterator<Item = (Region, &'a RegionContent)>) -> Self {
        let mut view = Self::default();
        for (region, content) in regions {
            let id = region.element_id().to_string();
            match content {
                RegionContent::Pie(chart) => {
                    view.charts.insert(id, chart.spec());
                }
                RegionContent::Bar(chart) => {
                    view.charts.insert(id, chart.spec());
                }
                other => {
                    view.regions.insert(id, Value::String(render_region(other)));
                }
            }
        }
        view
    }
}

/// Markup for a non-chart region. Chart regions render empty; the page
/// plots them from their specs.
pub fn render_region(content: &RegionContent) -> String {
    match content {
        RegionContent::Empty | RegionContent::Pie(_) | RegionContent::Bar(_) => String::new(),
        RegionContent::Notice(notice) => render_notice(notice),
        RegionContent::Summary(summary) => render_summary(summary),
        RegionContent::Suggestions(items) => render_suggestions(items),
        RegionContent::FoodCards(cards) => render_food_cards(cards),
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Progress => "notice",
        NoticeKind::Warning => "notice warning",
        NoticeKind::Error => "notice error",
    };
    format!("<p class=\"{class}\">{}</p>", escape_html(&notice.text))
}

fn render_summary(summary: &SummaryView) -> String {
    let mut out = format!("<h2 class=\"section-title\">{SUMMARY_TITLE}</h2><ul class=\"nutrients\">");
    for line in &summary.nutrients {
        let _ = write!(
            out,
            "<li><b>{}:</b> {}</li>",
            escape_html(&line.name),
            format_amount(line.value)
        );
    }
    out.push_str("</ul>");
    if !summary.unrecognised.is_empty() {
        let names: Vec<String> = summary.unrecognised.iter().map(|n| escape_html(n)).collect();
        let _ = write!(
            out,
            "<p class=\"missing\">{UNRECOGNISED_LABEL}: {}</p>",
            names.join(", ")
        );
    }
    if let Some(table) = &summary.breakdown {
        out.push_str(&render_breakdown(table));
    }
    out
}

fn render_breakdown(table: &BreakdownTable) -> String {
    let mut out = format!(
        "<button type=\"button\" class=\"toggle\" data-action=\"toggle-breakdown\">{BREAKDOWN_BUTTON}</button>\
         <div id=\"{BREAKDOWN_BOX_ID}\" class=\"breakdown hidden\"><table><thead><tr>"
    );
    for header in BREAKDOWN_HEADERS {
        let _ = write!(out, "<th>{header}</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for entry in &table.rows {
        out.push_str("<tr>");
        for cell in BreakdownTable::cells(entry) {
            let _ = write!(out, "<td>{}</td>", escape_html(&cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

fn render_suggestions(items: &[String]) -> String {
    let mut out = format!("<h2 class=\"section-title\">{SUGGESTIONS_TITLE}</h2><ul class=\"tips\">");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
    out
}

fn render_food_cards(cards: &[FoodCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = write!(out, "<div class=\"food-card\"><h4>{}</h4>", escape_html(&card.food));
        for (label, value) in card.facts {
            let _ = write!(out, "<p><b>{label}:</b> {}</p>", format_amount(value));
        }
        out.push_str("</div>");
    }
    out
}

pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}
