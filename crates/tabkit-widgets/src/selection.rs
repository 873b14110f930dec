//! Selection and keyboard-navigation state for an indexed row of items.
//!
//! [`SelectionController`] is the decision logic behind
//! [`Tabs`](crate::tabs::Tabs): it owns the selected index, reconciles it
//! against a host-controlled value, skips disabled items when moving with the
//! arrow keys, and tracks whether the compact dropdown presentation is open.
//! It knows nothing about rendering; hosts pass plain indices in and get plain
//! indices back.
//!
//! Navigation wraps exactly one step past either end of the enabled items.
//! A current index that is not itself enabled counts as sitting *before* the
//! first enabled item, so stepping forward lands on the first enabled item
//! and stepping backward wraps to the last one.

/// Errors returned by the checked controller operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// An item index past the end of the item list.
    #[error("index {index} out of bounds for {len} items")]
    OutOfBounds { index: usize, len: usize },
    /// A direction other than -1 or +1.
    #[error("invalid direction {0}, expected -1 or 1")]
    InvalidDirection(i32),
}

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower indices.
    Prev,
    /// Towards higher indices.
    Next,
}

impl Direction {
    /// Signed step size: -1 for [`Prev`](Direction::Prev), +1 for [`Next`](Direction::Next).
    pub fn delta(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = SelectionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Prev),
            1 => Ok(Direction::Next),
            other => Err(SelectionError::InvalidDirection(other)),
        }
    }
}

/// Whether moving focus with the arrow keys also commits the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Selection follows focus immediately.
    #[default]
    Automatic,
    /// Focus moves on its own; selection changes only on an explicit confirm.
    Manual,
}

/// One selectable entry.  Its index is its position in the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    /// Presentation payload, never inspected by the controller.
    pub label: T,
    /// Disabled items are skipped by navigation.
    pub disabled: bool,
}

impl<T> Item<T> {
    /// An enabled item.
    pub fn new(label: T) -> Self {
        Self {
            label,
            disabled: false,
        }
    }

    /// A disabled item.
    pub fn disabled(label: T) -> Self {
        Self {
            label,
            disabled: true,
        }
    }
}

/// Result of a directional key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Index the host should move presentation focus to.
    pub target: usize,
    /// The new selection, when the key press also changed it.
    pub selection_changed: Option<usize>,
}

/// Owns "which item is selected" and "is the compact menu open".
#[derive(Debug, Clone)]
pub struct SelectionController<T> {
    items: Vec<Item<T>>,
    selected: usize,
    external: Option<usize>,
    dropdown_expanded: bool,
}

impl<T> Default for SelectionController<T> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

impl<T> SelectionController<T> {
    /// Create a controller over `items`.
    ///
    /// `initial` seeds both the selection and the last observed external
    /// value; without it the first item is selected.  An initial value past
    /// the end of a non-empty list is clamped to the last item.
    pub fn new(items: Vec<Item<T>>, initial: Option<usize>) -> Self {
        let mut controller = Self {
            items: Vec::new(),
            selected: initial.unwrap_or(0),
            external: initial,
            dropdown_expanded: false,
        };
        controller.set_items(items);
        controller
    }

    /// All items in display order.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Number of items, enabled or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the selected item.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected item, if the list is non-empty.
    pub fn selected_item(&self) -> Option<&Item<T>> {
        self.items.get(self.selected)
    }

    /// Whether the compact dropdown presentation is open.
    pub fn dropdown_expanded(&self) -> bool {
        self.dropdown_expanded
    }

    /// Replace the item list, clamping the selection into the new bounds.
    pub fn set_items(&mut self, items: Vec<Item<T>>) {
        self.items = items;
        if !self.items.is_empty() && self.selected >= self.items.len() {
            let clamped = self.items.len() - 1;
            tracing::debug!(from = self.selected, to = clamped, "selection clamped to item list");
            self.selected = clamped;
        }
    }

    /// Enable or disable the item at `index`.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> Result<(), SelectionError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(SelectionError::OutOfBounds { index, len })?;
        item.disabled = disabled;
        Ok(())
    }

    /// Whether `index` names an existing item that is not disabled.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| !item.disabled)
    }

    /// Indices of enabled items in ascending order.
    ///
    /// The iterator is lazy and can be cloned to walk it again; it reads the
    /// current disabled flags every time it is created.
    pub fn enabled_indices(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.disabled)
            .map(|(index, _)| index)
    }

    /// Lowest enabled index.
    pub fn first_enabled(&self) -> Option<usize> {
        self.enabled_indices().next()
    }

    /// Highest enabled index.
    pub fn last_enabled(&self) -> Option<usize> {
        self.enabled_indices().last()
    }

    /// Adopt a host-supplied selection if it differs from the last one seen.
    ///
    /// Returns `true` when `selected` was replaced.  Passing `None`, or the
    /// same value as the previous call, leaves internal navigation alone.
    pub fn reconcile_external(&mut self, value: Option<usize>) -> bool {
        let Some(value) = value else {
            return false;
        };
        if self.external == Some(value) {
            return false;
        }
        let len = self.items.len();
        debug_assert!(
            len == 0 || value < len,
            "external selection {value} out of bounds for {len} items"
        );
        if len != 0 && value >= len {
            return false;
        }
        tracing::debug!(value, previous = self.selected, "external selection adopted");
        self.external = Some(value);
        self.selected = value;
        true
    }

    /// The enabled item one step from `current` in `direction`, wrapping at
    /// either end.  `None` when no item is enabled.
    pub fn navigate(&self, current: usize, direction: Direction) -> Option<usize> {
        let mut enabled = self.enabled_indices();
        let len = enabled.clone().count() as isize;
        if len == 0 {
            return None;
        }
        debug_assert!(
            current < self.items.len(),
            "navigate from {current} out of bounds for {} items",
            self.items.len()
        );

        let pos = enabled
            .clone()
            .position(|index| index == current)
            .map_or(-1, |p| p as isize);
        let next = (pos + direction.delta()).max(-1);
        let wrapped = if (0..len).contains(&next) {
            next
        } else {
            next - next.signum() * len
        };
        enabled.nth(wrapped as usize)
    }

    /// Select `index` and collapse the dropdown.
    ///
    /// Returns the new index when the selection actually changed, which is the
    /// host's cue to emit a selection-changed notification.  Re-activating the
    /// selected item only collapses the dropdown.  Does nothing on an empty
    /// list.
    #[must_use = "the returned index is the selection-changed notification"]
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        debug_assert!(index < len, "activate({index}) out of bounds for {len} items");
        if index >= len {
            return None;
        }

        self.dropdown_expanded = false;
        if index == self.selected {
            return None;
        }
        tracing::debug!(index, previous = self.selected, "selection changed");
        self.selected = index;
        Some(index)
    }

    /// Checked [`activate`](Self::activate): an out-of-range index (including
    /// any index on an empty list) is an error instead of an assertion.
    pub fn try_activate(&mut self, index: usize) -> Result<Option<usize>, SelectionError> {
        let len = self.items.len();
        if index >= len {
            return Err(SelectionError::OutOfBounds { index, len });
        }
        Ok(self.activate(index))
    }

    /// Open or close the dropdown.  Returns the new state.
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_expanded = !self.dropdown_expanded;
        self.dropdown_expanded
    }

    /// Open or close the dropdown without touching the selection.
    pub fn set_dropdown_expanded(&mut self, expanded: bool) {
        self.dropdown_expanded = expanded;
    }

    /// Handle a previous/next key press while `current` has focus.
    ///
    /// In [`SelectionMode::Automatic`] the target is also activated.
    pub fn on_directional_key(
        &mut self,
        current: usize,
        direction: Direction,
        mode: SelectionMode,
    ) -> Option<Navigation> {
        let target = self.navigate(current, direction)?;
        let selection_changed = match mode {
            SelectionMode::Automatic => self.activate(target),
            SelectionMode::Manual => None,
        };
        Some(Navigation {
            target,
            selection_changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(disabled: &[bool]) -> Vec<Item<String>> {
        disabled
            .iter()
            .enumerate()
            .map(|(i, &d)| Item {
                label: format!("tab {i}"),
                disabled: d,
            })
            .collect()
    }

    /// Five items with 0 and 2 disabled: enabled indices are [1, 3, 4].
    fn gapped() -> SelectionController<String> {
        SelectionController::new(items(&[true, false, true, false, false]), Some(1))
    }

    #[test]
    fn new_defaults_to_first_item() {
        let c = SelectionController::new(items(&[false, false]), None);
        assert_eq!(c.selected(), 0);
        assert!(!c.dropdown_expanded());
    }

    #[test]
    fn new_clamps_initial_selection() {
        let c = SelectionController::new(items(&[false, false, false]), Some(9));
        assert_eq!(c.selected(), 2);
    }

    #[test]
    fn enabled_indices_skip_disabled() {
        let c = gapped();
        assert_eq!(c.enabled_indices().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(c.first_enabled(), Some(1));
        assert_eq!(c.last_enabled(), Some(4));
    }

    #[test]
    fn enabled_indices_reflect_flag_changes() {
        let mut c = gapped();
        c.set_disabled(0, false).unwrap();
        c.set_disabled(4, true).unwrap();
        assert_eq!(c.enabled_indices().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn enabled_indices_restart_from_clone() {
        let c = gapped();
        let it = c.enabled_indices();
        assert_eq!(it.clone().count(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn set_disabled_out_of_bounds() {
        let mut c = gapped();
        assert_eq!(
            c.set_disabled(5, true),
            Err(SelectionError::OutOfBounds { index: 5, len: 5 })
        );
    }

    #[test]
    fn navigate_wraps_forward_and_back() {
        let c = gapped();
        assert_eq!(c.navigate(4, Direction::Next), Some(1));
        assert_eq!(c.navigate(1, Direction::Prev), Some(4));
    }

    #[test]
    fn navigate_steps_over_disabled() {
        let c = gapped();
        assert_eq!(c.navigate(1, Direction::Next), Some(3));
        assert_eq!(c.navigate(3, Direction::Next), Some(4));
        assert_eq!(c.navigate(4, Direction::Prev), Some(3));
        assert_eq!(c.navigate(3, Direction::Prev), Some(1));
    }

    #[test]
    fn navigate_from_disabled_item() {
        let c = gapped();
        assert_eq!(c.navigate(2, Direction::Next), Some(1));
        assert_eq!(c.navigate(2, Direction::Prev), Some(4));
        assert_eq!(c.navigate(0, Direction::Next), Some(1));
        assert_eq!(c.navigate(0, Direction::Prev), Some(4));
    }

    #[test]
    fn navigate_single_enabled_item_stays_put() {
        let c = SelectionController::new(items(&[true, false, true]), None);
        assert_eq!(c.navigate(1, Direction::Next), Some(1));
        assert_eq!(c.navigate(1, Direction::Prev), Some(1));
        assert_eq!(c.navigate(0, Direction::Prev), Some(1));
    }

    #[test]
    fn navigate_all_disabled_is_none() {
        let c = SelectionController::new(items(&[true, true]), None);
        assert_eq!(c.navigate(0, Direction::Next), None);
        assert_eq!(c.navigate(1, Direction::Prev), None);
    }

    #[test]
    fn empty_list_is_noop() {
        let mut c: SelectionController<String> = SelectionController::default();
        assert_eq!(c.navigate(3, Direction::Next), None);
        assert_eq!(c.navigate(0, Direction::Prev), None);

        c.set_dropdown_expanded(true);
        assert_eq!(c.activate(0), None);
        assert_eq!(c.selected(), 0);
        assert!(c.dropdown_expanded());
        assert!(c.on_directional_key(0, Direction::Next, SelectionMode::Automatic).is_none());
    }

    #[test]
    fn activate_changes_selection_once() {
        let mut c = gapped();
        assert_eq!(c.activate(3), Some(3));
        assert_eq!(c.selected(), 3);
        assert_eq!(c.activate(3), None);
        assert_eq!(c.selected(), 3);
    }

    #[test]
    fn activate_selected_is_idempotent() {
        let mut c = gapped();
        for _ in 0..3 {
            let current = c.selected();
            assert_eq!(c.activate(current), None);
            assert_eq!(c.selected(), current);
        }
    }

    #[test]
    fn activate_collapses_dropdown() {
        let mut c = gapped();
        assert!(c.toggle_dropdown());
        assert_eq!(c.activate(c.selected()), None);
        assert!(!c.dropdown_expanded());

        c.toggle_dropdown();
        assert_eq!(c.activate(4), Some(4));
        assert!(!c.dropdown_expanded());
    }

    #[test]
    fn toggle_dropdown_leaves_selection() {
        let mut c = gapped();
        assert!(c.toggle_dropdown());
        assert!(!c.toggle_dropdown());
        assert_eq!(c.selected(), 1);
    }

    #[test]
    fn try_activate_reports_out_of_bounds() {
        let mut c = gapped();
        assert_eq!(
            c.try_activate(7),
            Err(SelectionError::OutOfBounds { index: 7, len: 5 })
        );
        assert_eq!(c.try_activate(4), Ok(Some(4)));

        let mut empty: SelectionController<String> = SelectionController::default();
        assert!(empty.try_activate(0).is_err());
    }

    #[test]
    fn external_same_value_applies_once() {
        let mut c = SelectionController::new(items(&[false; 10]), None);
        assert!(c.reconcile_external(Some(5)));
        assert_eq!(c.selected(), 5);

        assert_eq!(c.activate(2), Some(2));
        assert!(!c.reconcile_external(Some(5)));
        assert_eq!(c.selected(), 2);

        assert!(c.reconcile_external(Some(7)));
        assert_eq!(c.selected(), 7);
    }

    #[test]
    fn external_none_is_noop() {
        let mut c = SelectionController::new(items(&[false; 4]), Some(2));
        assert!(!c.reconcile_external(None));
        assert_eq!(c.selected(), 2);
    }

    #[test]
    fn external_matching_initial_is_noop() {
        let mut c = SelectionController::new(items(&[false; 4]), Some(2));
        assert_eq!(c.activate(3), Some(3));
        assert!(!c.reconcile_external(Some(2)));
        assert_eq!(c.selected(), 3);
    }

    #[test]
    fn external_may_select_disabled_item() {
        let mut c = gapped();
        assert!(c.reconcile_external(Some(2)));
        assert_eq!(c.selected(), 2);
        assert!(!c.is_enabled(2));
    }

    #[test]
    fn external_before_items_then_clamped() {
        let mut c: SelectionController<String> = SelectionController::default();
        assert!(c.reconcile_external(Some(6)));
        c.set_items(items(&[false, false, false]));
        assert_eq!(c.selected(), 2);
    }

    #[test]
    fn automatic_mode_commits_target() {
        let mut c = gapped();
        let nav = c
            .on_directional_key(1, Direction::Next, SelectionMode::Automatic)
            .unwrap();
        assert_eq!(nav.target, 3);
        assert_eq!(nav.selection_changed, Some(3));
        assert_eq!(c.selected(), 3);
    }

    #[test]
    fn manual_mode_only_moves_focus() {
        let mut c = gapped();
        let nav = c
            .on_directional_key(1, Direction::Prev, SelectionMode::Manual)
            .unwrap();
        assert_eq!(nav.target, 4);
        assert_eq!(nav.selection_changed, None);
        assert_eq!(c.selected(), 1);

        assert_eq!(c.activate(nav.target), Some(4));
        assert_eq!(c.selected(), 4);
    }

    #[test]
    fn automatic_mode_onto_selected_reports_no_change() {
        let mut c = SelectionController::new(items(&[true, false, true]), Some(1));
        let nav = c
            .on_directional_key(1, Direction::Next, SelectionMode::Automatic)
            .unwrap();
        assert_eq!(nav.target, 1);
        assert_eq!(nav.selection_changed, None);
    }

    #[test]
    fn direction_from_i32() {
        assert_eq!(Direction::try_from(-1), Ok(Direction::Prev));
        assert_eq!(Direction::try_from(1), Ok(Direction::Next));
        assert_eq!(
            Direction::try_from(0),
            Err(SelectionError::InvalidDirection(0))
        );
        assert_eq!(Direction::Prev.delta(), -1);
    }

    #[test]
    fn set_items_clamps_selection() {
        let mut c = SelectionController::new(items(&[false; 6]), Some(5));
        c.set_items(items(&[false, false]));
        assert_eq!(c.selected(), 1);
        assert_eq!(c.selected_item().map(|i| i.label.as_str()), Some("tab 1"));
    }

    #[test]
    fn set_items_keeps_last_external_value() {
        let mut c = SelectionController::new(items(&[false; 3]), None);
        assert!(c.reconcile_external(Some(2)));
        assert_eq!(c.activate(0), Some(0));
        c.set_items(items(&[false; 4]));
        assert!(!c.reconcile_external(Some(2)));
        assert_eq!(c.selected(), 0);
    }
}
