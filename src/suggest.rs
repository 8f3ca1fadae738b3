/// Meal names offered while typing, in display order.
pub const KNOWN_MEALS: [&str; 7] = [
    "Idli",
    "Dosa",
    "Sambar",
    "Curd Rice",
    "Upma",
    "Vada",
    "Pongal",
];

/// Entries of `list` whose lowercase form starts with the lowercase `input`,
/// in list order. An empty input matches everything.
pub fn filter_meals<'a>(list: &[&'a str], input: &str) -> Vec<&'a str> {
    let prefix = input.to_lowercase();
    list.iter()
        .copied()
        .filter(|meal| meal.to_lowercase().starts_with(&prefix))
        .collect()
}

/// The list rendered under the meal input. An empty box is still present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionBox {
    items: Vec<String>,
}

impl SuggestionBox {
    pub fn show<S: AsRef<str>>(&mut self, matches: &[S]) {
        self.items = matches.iter().map(|m| m.as_ref().to_string()).collect();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes the item at `index` and empties the box. Out-of-range indices
    /// leave the box untouched.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let chosen = self.items.swap_remove(index);
        self.items.clear();
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_whole_list() {
        assert_eq!(filter_meals(&KNOWN_MEALS, ""), KNOWN_MEALS.to_vec());
    }

    #[test]
    fn prefix_match_ignores_case_and_keeps_order() {
        assert_eq!(filter_meals(&KNOWN_MEALS, "d"), vec!["Dosa"]);
        assert_eq!(filter_meals(&KNOWN_MEALS, "CURD r"), vec!["Curd Rice"]);
        assert_eq!(filter_meals(&["Upma", "idli", "Idiyappam"], "id"), vec!["idli", "Idiyappam"]);
    }

    #[test]
    fn prefix_must_start_the_name() {
        assert!(filter_meals(&KNOWN_MEALS, "rice").is_empty());
        assert!(filter_meals(&KNOWN_MEALS, "dosai").is_empty());
    }

    #[test]
    fn matches_equal_reference_definition_for_every_prefix() {
        let inputs = ["", "i", "S", "sa", "v", "PO", "pongal", "x", " "];
        for input in inputs {
            let expected: Vec<&str> = KNOWN_MEALS
                .iter()
                .copied()
                .filter(|m| m.to_lowercase().starts_with(&input.to_lowercase()))
                .collect();
            assert_eq!(filter_meals(&KNOWN_MEALS, input), expected, "input {input:?}");
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(filter_meals(&[], "").is_empty());
    }

    #[test]
    fn select_copies_item_and_clears_box() {
        let mut suggestions = SuggestionBox::default();
        suggestions.show(&filter_meals(&KNOWN_MEALS, "")[..3]);

        assert_eq!(suggestions.select(1).as_deref(), Some("Dosa"));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut suggestions = SuggestionBox::default();
        suggestions.show(&["Vada"]);
        assert_eq!(suggestions.select(4), None);
        assert_eq!(suggestions.items(), ["Vada".to_string()]);
    }
}
