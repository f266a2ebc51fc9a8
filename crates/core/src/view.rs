//! View-state machine for the browse/search display.
//!
//! The controller is a pure function of (current state, event); the
//! frontend re-filters and re-renders after every transition and derives
//! panel visibility from the resulting mode. No display types leak in
//! here, which keeps the transitions testable on their own.

/// Category value that matches every record.
pub const CATEGORY_ALL: &str = "all";

/// Built-in category tags offered by the UI, `"all"` first.
pub const CATEGORY_TAGS: &[&str] = &[
    CATEGORY_ALL,
    "rpg",
    "action",
    "adventure",
    "platformer",
    "simulation",
    "strategy",
];

/// Display mode derived from the current term and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    /// No active search; highlights strip is visible.
    Browsing,
    /// A term or non-default category is active; grid shows results.
    Searching,
}

/// User-facing commands handled by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Submit a free-text search term (may be empty).
    SubmitSearch(String),
    /// Activate a category tag.
    SelectCategory(String),
    /// Clear the term and category and return to browsing.
    Reset,
}

/// Transient view state owned by the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    term: String,
    category: String,
    mode: BrowseMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: CATEGORY_ALL.to_string(),
            mode: BrowseMode::Browsing,
        }
    }
}

impl ViewState {
    /// Active search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Active category tag. Exactly one is active at a time.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current display mode.
    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    /// Apply a user command, recomputing the mode.
    ///
    /// Idempotent: applying the same event to equal states yields equal
    /// states.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SubmitSearch(term) => {
                self.term = term.trim().to_string();
            }
            ViewEvent::SelectCategory(tag) => {
                self.category = tag.trim().to_lowercase();
                if self.category.is_empty() {
                    self.category = CATEGORY_ALL.to_string();
                }
            }
            ViewEvent::Reset => {
                self.term.clear();
                self.category = CATEGORY_ALL.to_string();
            }
        }
        self.mode = if self.term.is_empty() && self.category == CATEGORY_ALL {
            BrowseMode::Browsing
        } else {
            BrowseMode::Searching
        };
    }

    /// Whether the highlights strip is shown.
    pub fn highlights_visible(&self) -> bool {
        self.mode == BrowseMode::Browsing
    }

    /// Heading over the full grid.
    pub fn heading(&self) -> &'static str {
        match self.mode {
            BrowseMode::Browsing => "All Games",
            BrowseMode::Searching => "Search Results",
        }
    }

    /// Whether the back/reset control is shown.
    pub fn reset_visible(&self) -> bool {
        self.mode == BrowseMode::Searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_browsing_with_all_category() {
        let state = ViewState::default();
        assert_eq!(state.mode(), BrowseMode::Browsing);
        assert_eq!(state.category(), CATEGORY_ALL);
        assert!(state.term().is_empty());
        assert!(state.highlights_visible());
        assert_eq!(state.heading(), "All Games");
        assert!(!state.reset_visible());
    }

    #[test]
    fn non_empty_term_enters_searching() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SubmitSearch("zelda".to_string()));
        assert_eq!(state.mode(), BrowseMode::Searching);
        assert!(!state.highlights_visible());
        assert_eq!(state.heading(), "Search Results");
        assert!(state.reset_visible());
    }

    #[test]
    fn empty_term_with_all_category_stays_browsing() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SubmitSearch("   ".to_string()));
        assert_eq!(state.mode(), BrowseMode::Browsing);
    }

    #[test]
    fn category_alone_enters_searching() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SelectCategory("RPG".to_string()));
        assert_eq!(state.category(), "rpg");
        assert_eq!(state.mode(), BrowseMode::Searching);
    }

    #[test]
    fn selecting_all_without_term_returns_to_browsing() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SelectCategory("rpg".to_string()));
        state.apply(ViewEvent::SelectCategory(CATEGORY_ALL.to_string()));
        assert_eq!(state.mode(), BrowseMode::Browsing);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SubmitSearch("mario".to_string()));
        state.apply(ViewEvent::SelectCategory("platformer".to_string()));
        state.apply(ViewEvent::Reset);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn events_are_idempotent() {
        let mut first = ViewState::default();
        first.apply(ViewEvent::SubmitSearch("doom".to_string()));
        let mut second = first.clone();
        second.apply(ViewEvent::SubmitSearch("doom".to_string()));
        assert_eq!(first, second);
    }
}
