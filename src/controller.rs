use crate::render::SectionId;
use crate::search::SearchableItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionFilter {
    #[default]
    All,
    Section(SectionId),
}

impl SectionFilter {
    pub fn allows(self, section: SectionId) -> bool {
        match self {
            Self::All => true,
            Self::Section(selected) => selected == section,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    SearchInput(String),
    FilterSelected(SectionFilter),
}

// Search never resets the filter and the filter never resets the search
// term; each event updates exactly one half of the state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    filter: SectionFilter,
    term: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> SectionFilter {
        self.filter
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn handle_event(mut self, event: Event) -> Self {
        match event {
            Event::SearchInput(text) => self.term = text.to_lowercase(),
            Event::FilterSelected(filter) => self.filter = filter,
        }
        self
    }

    // An item is visible iff its section passes the filter and its text
    // matches the term. The counter reads this same combined flag, so a
    // filtered-out section never contributes to the displayed count.
    pub fn is_visible(&self, item: &SearchableItem) -> bool {
        self.filter.allows(item.section) && item.matches(&self.term)
    }

    pub fn section_visible(&self, section: SectionId) -> bool {
        self.filter.allows(section)
    }

    pub fn results_count(&self, items: &[SearchableItem]) -> String {
        let total = items.len();
        if self.term.is_empty() {
            format!("Showing all {total} items")
        } else {
            let displayed = items.iter().filter(|item| self.is_visible(item)).count();
            format!("Showing {displayed} of {total} results")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<SearchableItem> {
        vec![
            SearchableItem::new(SectionId::Accounts, "Easy Account PAYU".to_string()),
            SearchableItem::new(SectionId::Accounts, "Aspire Current Account".to_string()),
            SearchableItem::new(SectionId::Fees, "ATM withdrawal cash".to_string()),
            SearchableItem::new(SectionId::Travel, "Flights Domestic booking travel".to_string()),
        ]
    }

    fn visible_texts(state: &AppState, items: &[SearchableItem]) -> Vec<String> {
        items
            .iter()
            .filter(|item| state.is_visible(item))
            .map(|item| item.text.clone())
            .collect()
    }

    #[test]
    fn default_state_shows_everything() {
        let state = AppState::new();
        let items = items();
        assert_eq!(visible_texts(&state, &items).len(), items.len());
        assert_eq!(state.results_count(&items), "Showing all 4 items");
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = items();
        let upper = AppState::new().handle_event(Event::SearchInput("ACCOUNT".to_string()));
        let lower = AppState::new().handle_event(Event::SearchInput("account".to_string()));

        assert_eq!(visible_texts(&upper, &items), visible_texts(&lower, &items));
        assert_eq!(visible_texts(&upper, &items).len(), 2);
    }

    #[test]
    fn clearing_the_term_restores_everything() {
        let items = items();
        let state = AppState::new()
            .handle_event(Event::SearchInput("atm".to_string()))
            .handle_event(Event::SearchInput(String::new()));

        assert_eq!(visible_texts(&state, &items).len(), items.len());
    }

    #[test]
    fn filter_hides_other_sections_regardless_of_term() {
        let items = items();
        let state = AppState::new()
            .handle_event(Event::FilterSelected(SectionFilter::Section(SectionId::Fees)));

        assert_eq!(visible_texts(&state, &items), vec!["ATM withdrawal cash".to_string()]);
        assert!(state.section_visible(SectionId::Fees));
        assert!(!state.section_visible(SectionId::Accounts));
    }

    #[test]
    fn search_does_not_reset_the_filter() {
        let items = items();
        let state = AppState::new()
            .handle_event(Event::FilterSelected(SectionFilter::Section(SectionId::Accounts)))
            .handle_event(Event::SearchInput("a".to_string()));

        assert_eq!(state.filter(), SectionFilter::Section(SectionId::Accounts));
        // Fees and Travel rows match "a" but sit outside the filter.
        assert_eq!(visible_texts(&state, &items).len(), 2);
    }

    #[test]
    fn filter_does_not_reset_the_search_term() {
        let state = AppState::new()
            .handle_event(Event::SearchInput("Booking".to_string()))
            .handle_event(Event::FilterSelected(SectionFilter::Section(SectionId::Travel)));

        assert_eq!(state.term(), "booking");
    }

    #[test]
    fn counter_reports_matches_out_of_total() {
        let mut many = Vec::new();
        for index in 0..10 {
            let text = if index < 3 { "cash withdrawal" } else { "card swipe" };
            many.push(SearchableItem::new(SectionId::Fees, text.to_string()));
        }

        let state = AppState::new().handle_event(Event::SearchInput("cash".to_string()));
        assert_eq!(state.results_count(&many), "Showing 3 of 10 results");

        let cleared = state.handle_event(Event::SearchInput(String::new()));
        assert_eq!(cleared.results_count(&many), "Showing all 10 items");
    }

    #[test]
    fn counter_matches_visible_rows_for_the_bundled_document() {
        let catalog = crate::loader::parse(include_str!("../data/pricing.json")).unwrap();
        let mut surface = crate::render::testing::RecordingSurface::default();
        let rendered = crate::render::render_catalog(&catalog, &mut surface);

        let state = AppState::new().handle_event(Event::SearchInput("withdrawal".to_string()));
        let visible = rendered.iter().filter(|item| state.is_visible(item)).count();
        assert!(visible > 0);
        assert_eq!(
            state.results_count(&rendered),
            format!("Showing {visible} of {} results", rendered.len())
        );

        let state = state
            .handle_event(Event::FilterSelected(SectionFilter::Section(SectionId::Travel)))
            .handle_event(Event::SearchInput("booking".to_string()));
        let visible: Vec<_> = rendered.iter().filter(|item| state.is_visible(item)).collect();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|item| item.section == SectionId::Travel));
        assert_eq!(
            state.results_count(&rendered),
            format!("Showing {} of {} results", visible.len(), rendered.len())
        );
    }

    #[test]
    fn counter_uses_the_combined_visibility_flag() {
        let items = items();
        let state = AppState::new()
            .handle_event(Event::FilterSelected(SectionFilter::Section(SectionId::Accounts)))
            .handle_event(Event::SearchInput("a".to_string()));

        // "a" matches every item, but only the two account rows pass the filter.
        assert_eq!(state.results_count(&items), "Showing 2 of 4 results");
    }
}
