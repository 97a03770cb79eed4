//! Collapse and show-all state of a list.

use relist_types::DEFAULT_RECORD_LIMIT;
use serde::Serialize;

pub const VIEW_ALL_LABEL: &str = "View All";
pub const COLLAPSE_LABEL: &str = "Collapse";
pub const COLLAPSED_ICON: &str = "utility:chevronright";
pub const EXPANDED_ICON: &str = "utility:chevrondown";

/// Pure view state; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub show_all: bool,
    pub is_collapsed: bool,
}

/// Owns a [`DisplayState`] and projects fetched rows onto what is visible.
///
/// Toggles never fetch: expanding to "all" only widens the slice over rows
/// that were already retrieved.
#[derive(Debug, Clone)]
pub struct DisplayStateController {
    state: DisplayState,
    limit: usize,
    collapsible: bool,
}

impl Default for DisplayStateController {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_LIMIT, false)
    }
}

impl DisplayStateController {
    pub fn new(limit: usize, collapsible: bool) -> Self {
        Self {
            state: DisplayState::default(),
            limit,
            collapsible,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// Flip collapsed/expanded. Ignored when the list is not collapsible.
    pub fn toggle_collapse(&mut self) {
        if self.collapsible {
            self.state.is_collapsed = !self.state.is_collapsed;
        }
    }

    /// Flip limited/all.
    pub fn toggle_show_all(&mut self) {
        self.state.show_all = !self.state.show_all;
    }

    /// Back to expanded and limited.
    pub fn reset(&mut self) {
        self.state = DisplayState::default();
    }

    /// The rows the renderer should draw.
    pub fn visible_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        if self.state.is_collapsed {
            return &[];
        }
        if self.state.show_all {
            rows
        } else {
            &rows[..rows.len().min(self.limit)]
        }
    }

    /// Whether there are more rows than the limited view shows.
    pub fn can_show_more(&self, total: usize) -> bool {
        total > self.limit
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.state.show_all { COLLAPSE_LABEL } else { VIEW_ALL_LABEL }
    }

    pub fn collapse_icon(&self) -> &'static str {
        if self.state.is_collapsed {
            COLLAPSED_ICON
        } else {
            EXPANDED_ICON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_view_shows_first_rows_in_order() {
        let rows = [1, 2, 3, 4, 5];
        let mut display = DisplayStateController::new(2, false);
        assert_eq!(display.visible_rows(&rows), &[1, 2]);
        assert_eq!(display.toggle_label(), VIEW_ALL_LABEL);

        display.toggle_show_all();
        assert_eq!(display.visible_rows(&rows), &rows);
        assert_eq!(display.toggle_label(), COLLAPSE_LABEL);

        display.toggle_show_all();
        assert_eq!(display.visible_rows(&rows), &[1, 2]);
    }

    #[test]
    fn fewer_rows_than_limit_are_all_visible() {
        let display = DisplayStateController::new(5, false);
        assert_eq!(display.visible_rows(&[1, 2]), &[1, 2]);
        assert!(display.visible_rows::<i32>(&[]).is_empty());
        assert!(!display.can_show_more(2));
        assert!(display.can_show_more(6));
    }

    #[test]
    fn collapse_hides_rows_when_collapsible() {
        let rows = [1, 2, 3];
        let mut display = DisplayStateController::new(2, true);
        assert_eq!(display.collapse_icon(), EXPANDED_ICON);

        display.toggle_collapse();
        assert!(display.state().is_collapsed);
        assert!(display.visible_rows(&rows).is_empty());
        assert_eq!(display.collapse_icon(), COLLAPSED_ICON);

        display.toggle_collapse();
        assert_eq!(display.visible_rows(&rows), &[1, 2]);
    }

    #[test]
    fn collapse_is_ignored_when_not_collapsible() {
        let mut display = DisplayStateController::new(2, false);
        display.toggle_collapse();
        assert_eq!(display.state(), DisplayState::default());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut display = DisplayStateController::new(1, true);
        display.toggle_collapse();
        display.toggle_show_all();
        display.reset();
        assert_eq!(display.state(), DisplayState::default());
    }
}
