//! Case-insensitive substring suggestions over a fixed candidate list.

/// Normalize raw input into a query: trimmed and lower-cased
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Candidates whose lower-cased form contains the normalized query.
///
/// Order follows the candidate list. Duplicates are kept and there is no
/// limit on the number of matches. An empty query matches nothing.
pub fn filter_candidates(candidates: &[String], raw_query: &str) -> Vec<String> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return Vec::new();
    }

    matching(candidates, &query).cloned().collect()
}

fn matching<'a>(
    candidates: &'a [String],
    query: &'a str,
) -> impl Iterator<Item = &'a String> + 'a {
    candidates
        .iter()
        .filter(move |candidate| candidate.to_lowercase().contains(query))
}

/// Text input with a list of suggestions drawn from a fixed candidate set
///
/// The candidate set is given at construction and never changes afterwards.
/// The suggestion list is rebuilt on every edit of the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionBox {
    candidates: Vec<String>,
    value: String,
    suggestions: Vec<String>,
    highlighted: usize,
}

impl SuggestionBox {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion (meaningless when none are shown)
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// True while at least one suggestion is shown
    pub fn is_showing(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Replace the whole value, as if the input content changed
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.on_input_change();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.on_input_change();
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
        self.on_input_change();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.on_input_change();
    }

    fn on_input_change(&mut self) {
        self.suggestions.clear();
        self.highlighted = 0;

        let query = normalize_query(&self.value);
        if query.is_empty() {
            return;
        }

        self.suggestions
            .extend(matching(&self.candidates, &query).cloned());
    }

    /// Move the highlight, wrapping around at either end
    pub fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.suggestions.len();
    }

    pub fn highlight_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        if self.highlighted == 0 {
            self.highlighted = self.suggestions.len() - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    /// Accept the suggestion at `index`.
    ///
    /// The value becomes the candidate exactly as listed and the suggestion
    /// list is emptied. Returns the accepted candidate, or None when `index`
    /// is out of range (nothing changes in that case).
    pub fn select(&mut self, index: usize) -> Option<String> {
        let chosen = self.suggestions.get(index)?.clone();
        self.value.clone_from(&chosen);
        self.suggestions.clear();
        self.highlighted = 0;
        Some(chosen)
    }

    pub fn select_highlighted(&mut self) -> Option<String> {
        self.select(self.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  PaR \t"), "par");
        assert_eq!(normalize_query("   "), "");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn empty_query_matches_nothing() {
        let c = candidates(&["Paris", "London"]);
        assert!(filter_candidates(&c, "").is_empty());
        assert!(filter_candidates(&c, "   ").is_empty());
    }

    #[test]
    fn substring_match_preserves_order() {
        let c = candidates(&["Paris", "London", "Parma"]);
        assert_eq!(filter_candidates(&c, "par"), vec!["Paris", "Parma"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = candidates(&["Paris"]);
        assert_eq!(filter_candidates(&c, "PAR"), vec!["Paris"]);
        assert_eq!(filter_candidates(&c, "RiS"), vec!["Paris"]);
    }

    #[test]
    fn match_is_anywhere_not_only_prefix() {
        let c = candidates(&["Pasta Bake", "Fish Pie"]);
        assert_eq!(filter_candidates(&c, "pie"), vec!["Fish Pie"]);
        assert_eq!(filter_candidates(&c, "a b"), vec!["Pasta Bake"]);
    }

    #[test]
    fn query_is_trimmed_but_inner_spaces_count() {
        let c = candidates(&["Fish Pie", "Fishpie"]);
        assert_eq!(filter_candidates(&c, "  fish pie  "), vec!["Fish Pie"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let c = candidates(&["Salad", "Salmon Dinner", "Salad"]);
        assert_eq!(
            filter_candidates(&c, "sal"),
            vec!["Salad", "Salmon Dinner", "Salad"]
        );
    }

    #[test]
    fn no_limit_on_match_count() {
        let c: Vec<String> = (0..50).map(|i| format!("Cookie {i}")).collect();
        assert_eq!(filter_candidates(&c, "cookie").len(), 50);
    }

    #[test]
    fn no_fuzzy_or_diacritic_folding() {
        let c = candidates(&["Crème Brûlée", "Pancakes"]);
        assert!(filter_candidates(&c, "creme").is_empty());
        assert!(filter_candidates(&c, "pnck").is_empty());
        assert_eq!(filter_candidates(&c, "CRÈME"), vec!["Crème Brûlée"]);
    }

    #[test]
    fn empty_candidate_set_never_suggests() {
        let mut b = SuggestionBox::new(Vec::new());
        b.set_value("anything");
        assert!(!b.is_showing());
    }

    #[test]
    fn box_refreshes_on_every_edit() {
        let mut b = SuggestionBox::new(candidates(&["Paris", "London", "Parma"]));
        assert!(!b.is_showing());

        b.push_char('p');
        assert_eq!(b.suggestions(), ["Paris", "Parma"]);

        b.push_char('a');
        b.push_char('r');
        b.push_char('i');
        assert_eq!(b.suggestions(), ["Paris"]);

        b.pop_char();
        assert_eq!(b.suggestions(), ["Paris", "Parma"]);

        b.clear();
        assert_eq!(b.value(), "");
        assert!(!b.is_showing());
    }

    #[test]
    fn whitespace_only_value_shows_nothing() {
        let mut b = SuggestionBox::new(candidates(&["Paris"]));
        b.set_value("   ");
        assert!(!b.is_showing());
        assert_eq!(b.value(), "   ");
    }

    #[test]
    fn select_sets_exact_candidate_and_clears() {
        let mut b = SuggestionBox::new(candidates(&["Pasta Bake", "Fish Pie"]));
        b.set_value("PIE");

        assert_eq!(b.select(0), Some("Fish Pie".to_string()));
        assert_eq!(b.value(), "Fish Pie");
        assert!(b.suggestions().is_empty());
    }

    #[test]
    fn select_out_of_range_changes_nothing() {
        let mut b = SuggestionBox::new(candidates(&["Paris", "Parma"]));
        b.set_value("par");

        assert_eq!(b.select(5), None);
        assert_eq!(b.value(), "par");
        assert_eq!(b.suggestions().len(), 2);
    }

    #[test]
    fn highlight_wraps_both_ways() {
        let mut b = SuggestionBox::new(candidates(&["Paris", "London", "Parma"]));
        b.set_value("par");
        assert_eq!(b.highlighted(), 0);

        b.highlight_next();
        assert_eq!(b.highlighted(), 1);
        b.highlight_next();
        assert_eq!(b.highlighted(), 0);
        b.highlight_previous();
        assert_eq!(b.highlighted(), 1);

        assert_eq!(b.select_highlighted(), Some("Parma".to_string()));
    }

    #[test]
    fn highlight_resets_when_value_changes() {
        let mut b = SuggestionBox::new(candidates(&["Paris", "Parma"]));
        b.set_value("pa");
        b.highlight_next();
        assert_eq!(b.highlighted(), 1);

        b.push_char('r');
        assert_eq!(b.highlighted(), 0);
    }

    #[test]
    fn candidates_survive_edits_and_selection() {
        let c = candidates(&["Paris", "London"]);
        let mut b = SuggestionBox::new(c.clone());
        b.set_value("lon");
        b.select(0);
        b.clear();
        assert_eq!(b.candidates(), c.as_slice());
    }
}
