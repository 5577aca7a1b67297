use crate::error::CategoryError;
use std::collections::HashSet;

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Business",
    "Fashion",
    "Promotions",
    "Newsletters",
    "Social Media",
];

// Same set a browser strips with `String.prototype.trim`: Unicode White_Space
// minus NEL, plus the byte order mark.
fn is_trim_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_trim_space)
}

#[derive(Debug, Clone)]
pub struct FilterState {
    // Categories, in display order
    categories: Vec<String>,
    selected: HashSet<String>,

    // Input buffers
    pub new_category: String,
    pub sender: String,
    pub keyword: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
            selected: HashSet::new(),
            new_category: String::new(),
            sender: String::new(),
            keyword: String::new(),
        }
    }
}

impl FilterState {
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flips the selection of `category`. Returns whether it is selected
    /// afterwards, or `None` if it is not a known category.
    pub fn toggle(&mut self, category: &str) -> Option<bool> {
        if !self.categories.iter().any(|c| c == category) {
            return None;
        }
        if self.selected.remove(category) {
            Some(false)
        } else {
            self.selected.insert(category.to_string());
            Some(true)
        }
    }

    /// Appends `raw` untouched. Whitespace is only considered for the emptiness
    /// check; the duplicate check is an exact, case-sensitive match.
    pub fn insert_category(&mut self, raw: &str) -> Result<(), CategoryError> {
        if is_blank(raw) {
            return Err(CategoryError::Empty);
        }
        if self.categories.iter().any(|c| c == raw) {
            return Err(CategoryError::Duplicate);
        }
        self.categories.push(raw.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TRIM_SPACES: [char; 9] = [
        ' ', '\t', '\n', '\r', '\u{0B}', '\u{A0}', '\u{2028}', '\u{3000}', '\u{FEFF}',
    ];

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.categories(), DEFAULT_CATEGORIES);
        assert_eq!(state.selected_count(), 0);
        assert!(state.new_category.is_empty());
    }

    #[test]
    fn test_insert_keeps_raw_text() {
        let mut state = FilterState::default();
        state.insert_category("  Work ").unwrap();
        assert_eq!(state.categories().len(), 6);
        assert_eq!(state.categories().last().map(String::as_str), Some("  Work "));
    }

    #[test]
    fn test_insert_rejects_blank() {
        let mut state = FilterState::default();
        assert_eq!(state.insert_category(""), Err(CategoryError::Empty));
        assert_eq!(state.insert_category("   \t"), Err(CategoryError::Empty));
        assert_eq!(state.categories().len(), 5);
    }

    #[test]
    fn test_duplicate_check_is_exact() {
        let mut state = FilterState::default();
        assert_eq!(state.insert_category("Business"), Err(CategoryError::Duplicate));
        // Different case and padding are distinct categories
        assert!(state.insert_category("business").is_ok());
        assert!(state.insert_category(" Business").is_ok());
        assert_eq!(state.categories().len(), 7);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut state = FilterState::default();
        state.toggle("Social Media");
        let before = state.clone();

        assert_eq!(state.toggle("Fashion"), Some(true));
        assert!(state.is_selected("Fashion"));
        assert_eq!(state.toggle("Fashion"), Some(false));

        assert_eq!(state.selected, before.selected);
    }

    #[test]
    fn test_clear_selection() {
        let mut state = FilterState::default();
        state.toggle("Business");
        state.toggle("Newsletters");
        state.clear_selection();
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.categories().len(), 5);
    }

    #[test]
    fn test_blank_check_matches_browser_trim() {
        let mut state = FilterState::default();
        assert_eq!(state.insert_category("\u{FEFF}"), Err(CategoryError::Empty));
        assert_eq!(state.insert_category(" \u{FEFF}\u{3000}"), Err(CategoryError::Empty));
        // NEL is not trimmed, so it counts as a name
        assert!(state.insert_category("\u{85}").is_ok());
        assert_eq!(state.categories().len(), 6);
    }

    #[test]
    fn test_toggle_ignores_unknown_category() {
        let mut state = FilterState::default();
        assert_eq!(state.toggle("Travel"), None);
        assert!(!state.is_selected("Travel"));
        assert_eq!(state.selected_count(), 0);

        state.insert_category("Travel").unwrap();
        assert_eq!(state.toggle("Travel"), Some(true));
    }

    proptest! {
        #[test]
        fn prop_insert_appends_exact_text(raw in "\\PC{0,24}") {
            prop_assume!(!is_blank(&raw));
            prop_assume!(!DEFAULT_CATEGORIES.contains(&raw.as_str()));

            let mut state = FilterState::default();
            prop_assert_eq!(state.insert_category(&raw), Ok(()));
            prop_assert_eq!(state.categories().len(), DEFAULT_CATEGORIES.len() + 1);
            prop_assert_eq!(state.categories().last(), Some(&raw));
        }

        #[test]
        fn prop_whitespace_only_is_rejected(
            chars in proptest::collection::vec(proptest::sample::select(TRIM_SPACES.to_vec()), 0..12)
        ) {
            let raw: String = chars.into_iter().collect();
            let mut state = FilterState::default();

            prop_assert_eq!(state.insert_category(&raw), Err(CategoryError::Empty));
            prop_assert_eq!(state.categories(), DEFAULT_CATEGORIES);
        }

        #[test]
        fn prop_double_toggle_restores_selection(
            history in proptest::collection::vec(0..DEFAULT_CATEGORIES.len(), 0..16),
            pick in 0..DEFAULT_CATEGORIES.len(),
        ) {
            let mut state = FilterState::default();
            for i in history {
                state.toggle(DEFAULT_CATEGORIES[i]);
            }
            let before = state.selected.clone();

            state.toggle(DEFAULT_CATEGORIES[pick]);
            state.toggle(DEFAULT_CATEGORIES[pick]);

            prop_assert_eq!(&state.selected, &before);
        }
    }
}
