use crate::render::{BarChart, FoodCard, PieChart, RenderModel, SummaryView};
use crate::suggest::{KNOWN_MEALS, SuggestionBox, filter_meals};
use std::collections::BTreeMap;

pub const ANALYZING_TEXT: &str = "⏳ Analyzing your meal...";

static EMPTY_REGION: RegionContent = RegionContent::Empty;

/// Output areas of the meal page, each with a fixed element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Summary,
    Suggestions,
    MacroChart,
    MicroChart,
    FoodDetails,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Summary,
        Region::Suggestions,
        Region::MacroChart,
        Region::MicroChart,
        Region::FoodDetails,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Region::Summary => "summary",
            Region::Suggestions => "suggestions",
            Region::MacroChart => "macroChart",
            Region::MicroChart => "microChart",
            Region::FoodDetails => "foodDetails",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Progress,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn progress(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Progress,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RegionContent {
    #[default]
    Empty,
    Notice(Notice),
    Summary(SummaryView),
    Suggestions(Vec<String>),
    Pie(PieChart),
    Bar(BarChart),
    FoodCards(Vec<FoodCard>),
}

/// In-memory model of the meal page: the input field, the suggestion box
/// under it, and the five output regions.
#[derive(Debug, Clone)]
pub struct Page {
    input: String,
    known_meals: Vec<&'static str>,
    suggestion_box: Option<SuggestionBox>,
    regions: BTreeMap<Region, RegionContent>,
    breakdown_visible: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self::with_known_meals(&KNOWN_MEALS)
    }

    pub fn with_known_meals(known_meals: &[&'static str]) -> Self {
        Self {
            input: String::new(),
            known_meals: known_meals.to_vec(),
            suggestion_box: None,
            regions: Region::ALL
                .into_iter()
                .map(|region| (region, RegionContent::Empty))
                .collect(),
            breakdown_visible: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Sets the field without running the suggestion filter.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Input-change event: updates the field and refilters the suggestion box,
    /// creating the box on first use.
    pub fn type_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        let matches = filter_meals(&self.known_meals, &self.input);
        self.suggestion_box
            .get_or_insert_with(SuggestionBox::default)
            .show(&matches);
    }

    pub fn suggestion_box(&self) -> Option<&SuggestionBox> {
        self.suggestion_box.as_ref()
    }

    /// Click on the suggestion at `index`: copies it into the field and
    /// clears the box.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let chosen = self.suggestion_box.as_mut()?.select(index)?;
        self.input = chosen;
        Some(&self.input)
    }

    pub fn region(&self, region: Region) -> &RegionContent {
        self.regions.get(&region).unwrap_or(&EMPTY_REGION)
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &RegionContent)> {
        self.regions.iter().map(|(region, content)| (*region, content))
    }

    fn set_region(&mut self, region: Region, content: RegionContent) {
        self.regions.insert(region, content);
    }

    /// Clears every output region and shows the progress line in the summary.
    pub fn reset_for_loading(&mut self) {
        for region in Region::ALL {
            self.set_region(region, RegionContent::Empty);
        }
        self.set_region(
            Region::Summary,
            RegionContent::Notice(Notice::progress(ANALYZING_TEXT)),
        );
        self.breakdown_visible = false;
    }

    /// Replaces only the summary region.
    pub fn show_notice(&mut self, notice: Notice) {
        self.set_region(Region::Summary, RegionContent::Notice(notice));
    }

    /// Writes a successful analysis into the page. Food cards are only placed
    /// when there are any; otherwise the details region keeps what it had.
    pub fn render(&mut self, model: RenderModel) {
        self.breakdown_visible = false;
        self.set_region(Region::Summary, RegionContent::Summary(model.summary));
        self.set_region(
            Region::Suggestions,
            RegionContent::Suggestions(model.suggestions),
        );
        self.set_region(Region::MacroChart, RegionContent::Pie(model.macro_chart));
        self.set_region(Region::MicroChart, RegionContent::Bar(model.micro_chart));
        if !model.food_cards.is_empty() {
            self.set_region(Region::FoodDetails, RegionContent::FoodCards(model.food_cards));
        }
    }

    pub fn has_breakdown(&self) -> bool {
        matches!(
            self.region(Region::Summary),
            RegionContent::Summary(SummaryView {
                breakdown: Some(_),
                ..
            })
        )
    }

    pub fn breakdown_visible(&self) -> bool {
        self.has_breakdown() && self.breakdown_visible
    }

    /// Flips breakdown visibility and returns the new state, or `None` when no
    /// breakdown table is on the page.
    pub fn toggle_breakdown(&mut self) -> Option<bool> {
        if !self.has_breakdown() {
            return None;
        }
        self.breakdown_visible = !self.breakdown_visible;
        Some(self.breakdown_visible)
    }
}
