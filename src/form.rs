use crate::notify::Notifier;
use crate::state::FilterState;
use tracing::{debug, info, warn};

/// The filter form: owns its state and reports every outcome through `N`.
#[derive(Debug)]
pub struct FilterForm<N> {
    state: FilterState,
    notifier: N,
}

impl<N: Notifier> FilterForm<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: FilterState::default(),
            notifier,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FilterState {
        &mut self.state
    }

    pub fn toggle_category(&mut self, name: &str) {
        match self.state.toggle(name) {
            Some(selected) => debug!(category = name, selected, "Toggled category"),
            None => warn!(category = name, "Ignored toggle of unknown category"),
        }
    }

    /// Adds the text currently in the "add category" input.
    pub fn add_category(&mut self) {
        let raw = self.state.new_category.clone();
        match self.state.insert_category(&raw) {
            Ok(()) => {
                self.state.new_category.clear();
                info!(category = %raw, "Added category");
                self.notifier.report_success("Category added successfully");
            }
            Err(e) => {
                warn!(category = %raw, "Rejected category: {}", e);
                self.notifier.report_error(&e.to_string());
            }
        }
    }

    // Nothing is filtered yet; the form only confirms the click.
    pub fn apply_filters(&self) {
        info!("Apply filters requested");
        self.notifier.report_success("Filters applied successfully");
    }

    pub fn reset_filters(&mut self) {
        let cleared = self.state.selected_count();
        self.state.clear_selection();
        info!(cleared, "Filters reset");
        self.notifier.report_success("Filters reset successfully");
    }
}
