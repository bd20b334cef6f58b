use crate::bounds::Bounds;
use crate::direction::Direction;
use crate::distance::distance_in_direction;

/// The outcome of a completed focus transition.
///
/// `blurred` carries the target that lost focus, when there was one. Within
/// a single transition the old target is always blurred before the new one
/// gains focus, and callers receive both in one value instead of wiring
/// callbacks into the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusChange<T> {
    pub blurred: Option<T>,
    pub focused: T,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    bounds: Bounds,
    target: T,
}

/// An ordered registry of focusable elements with directional movement.
///
/// Each screen owns one navigator and registers its interactive regions in
/// presentation order. At most one entry holds focus at a time. Operations
/// that cannot complete (index out of range, no candidate in the requested
/// direction, nothing focused) leave the registry untouched and return
/// nothing; they are never errors.
#[derive(Debug)]
pub struct FocusNavigator<T> {
    entries: Vec<Entry<T>>,
    focused: Option<usize>,
}

impl<T: PartialEq + Clone> FocusNavigator<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            focused: None,
        }
    }

    /// Appends a focusable element. Registering a target that is already
    /// present does nothing; membership is unique.
    pub fn register(&mut self, bounds: Bounds, target: T) {
        if self.index_of(&target).is_some() {
            return;
        }
        self.entries.push(Entry { bounds, target });
    }

    /// Removes a focusable element, reporting whether it was present. If the
    /// removed element held focus, focus clears; entries behind it keep
    /// their focus association as indices shift down.
    pub fn unregister(&mut self, target: &T) -> bool {
        let index = match self.index_of(target) {
            Some(index) => index,
            None => return false,
        };
        self.entries.remove(index);
        self.focused = match self.focused {
            Some(current) if current == index => {
                log::debug!("focused entry unregistered, clearing focus");
                None
            }
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        true
    }

    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.entries.iter().position(|entry| entry.target == *target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and any focus with them.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&T> {
        self.focused.map(|index| &self.entries[index].target)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, target: &T) -> bool {
        self.focused().map_or(false, |focused| focused == target)
    }

    /// Moves focus to the entry at `index`. An out-of-range index changes
    /// nothing and reports nothing. Focusing the already focused entry still
    /// reports a transition (blur and focus of the same target), so callers
    /// re-run their focus reactions.
    pub fn focus_item(&mut self, index: usize) -> Option<FocusChange<T>> {
        if index >= self.entries.len() {
            return None;
        }
        let blurred = self
            .focused
            .map(|current| self.entries[current].target.clone());
        self.focused = Some(index);
        Some(FocusChange {
            blurred,
            focused: self.entries[index].target.clone(),
        })
    }

    /// Moves focus to the entry holding `target`, if registered. Screens use
    /// this to restore focus after rebuilding their registries.
    pub fn focus_target(&mut self, target: &T) -> Option<FocusChange<T>> {
        let index = self.index_of(target)?;
        self.focus_item(index)
    }

    /// Moves focus to the nearest entry in `direction`, scored by
    /// `distance_in_direction`. No-op when nothing is focused or no entry
    /// lies in that direction. Ties keep the earliest registered entry.
    pub fn move_focus(&mut self, direction: Direction) -> Option<FocusChange<T>> {
        let from_index = self.focused?;
        let from_bounds = self.entries[from_index].bounds;
        let mut nearest: Option<(usize, f32)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if index == from_index {
                continue;
            }
            let distance = match distance_in_direction(&from_bounds, &entry.bounds, direction) {
                Some(distance) => distance,
                None => continue,
            };
            let closer = match nearest {
                Some((_, best)) => distance < best,
                None => true,
            };
            if closer {
                nearest = Some((index, distance));
            }
        }
        let (index, distance) = nearest?;
        log::debug!("focus moved {:?} to entry {} (distance {})", direction, index, distance);
        self.focus_item(index)
    }
}

impl<T: PartialEq + Clone> Default for FocusNavigator<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: f32, top: f32) -> Bounds {
        Bounds::new(left, top, 50.0, 50.0)
    }

    /// A row of three squares at x = 0, 100, 200.
    fn row_of_three() -> FocusNavigator<&'static str> {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "left");
        nav.register(square(100.0, 0.0), "middle");
        nav.register(square(200.0, 0.0), "right");
        nav
    }

    fn assert_single_focus(nav: &FocusNavigator<&'static str>, targets: &[&'static str]) {
        let focused = targets.iter().filter(|t| nav.is_focused(t)).count();
        match nav.focused_index() {
            Some(_) => assert_eq!(focused, 1),
            None => assert_eq!(focused, 0),
        }
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "a");
        nav.register(square(100.0, 0.0), "a");
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn test_unregister_reports_removal() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "a");
        assert!(nav.unregister(&"a"));
        assert!(!nav.unregister(&"a"));
        assert!(nav.is_empty());
    }

    #[test]
    fn test_unregister_focused_clears_focus() {
        let mut nav = row_of_three();
        nav.focus_item(1);
        assert!(nav.unregister(&"middle"));
        assert_eq!(nav.focused(), None);
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn test_unregister_earlier_entry_keeps_focus_target() {
        let mut nav = row_of_three();
        nav.focus_item(2);
        assert!(nav.unregister(&"left"));
        assert_eq!(nav.focused(), Some(&"right"));
    }

    #[test]
    fn test_focus_item_out_of_bounds_is_noop() {
        let mut nav = row_of_three();
        nav.focus_item(0);
        assert_eq!(nav.focus_item(3), None);
        assert_eq!(nav.focused(), Some(&"left"));
    }

    #[test]
    fn test_focus_item_reports_previous_target() {
        let mut nav = row_of_three();
        assert_eq!(
            nav.focus_item(0),
            Some(FocusChange { blurred: None, focused: "left" })
        );
        assert_eq!(
            nav.focus_item(2),
            Some(FocusChange { blurred: Some("left"), focused: "right" })
        );
    }

    #[test]
    fn test_refocus_reports_transition_without_state_change() {
        let mut nav = row_of_three();
        nav.focus_item(1);
        let change = nav.focus_item(1);
        assert_eq!(
            change,
            Some(FocusChange { blurred: Some("middle"), focused: "middle" })
        );
        assert_eq!(nav.focused_index(), Some(1));
    }

    #[test]
    fn test_move_with_nothing_focused_is_noop() {
        let mut nav = row_of_three();
        assert_eq!(nav.move_focus(Direction::Right), None);
        assert_eq!(nav.focused(), None);
    }

    #[test]
    fn test_move_selects_nearest_not_farthest() {
        let mut nav = row_of_three();
        nav.focus_item(0);
        let change = nav.move_focus(Direction::Right);
        assert_eq!(change.map(|c| c.focused), Some("middle"));
    }

    #[test]
    fn test_move_walks_back_along_the_row() {
        let mut nav = row_of_three();
        nav.focus_item(2);
        nav.move_focus(Direction::Left);
        assert_eq!(nav.focused(), Some(&"middle"));
        nav.move_focus(Direction::Left);
        assert_eq!(nav.focused(), Some(&"left"));
    }

    #[test]
    fn test_horizontal_move_in_vertical_stack_is_noop() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "upper");
        nav.register(square(0.0, 60.0), "lower");
        nav.focus_item(0);
        assert_eq!(nav.move_focus(Direction::Left), None);
        assert_eq!(nav.move_focus(Direction::Right), None);
        assert_eq!(nav.focused(), Some(&"upper"));
    }

    #[test]
    fn test_single_entry_never_moves() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "only");
        nav.focus_item(0);
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(nav.move_focus(direction), None);
        }
        assert_eq!(nav.focused(), Some(&"only"));
    }

    #[test]
    fn test_tie_prefers_registration_order() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "source");
        nav.register(square(100.0, 0.0), "first");
        nav.register(square(100.0, 0.0), "second");
        nav.focus_item(0);
        let change = nav.move_focus(Direction::Right);
        assert_eq!(change.map(|c| c.focused), Some("first"));
    }

    #[test]
    fn test_aligned_candidate_beats_nearer_diagonal() {
        let mut nav = FocusNavigator::new();
        nav.register(square(0.0, 0.0), "source");
        nav.register(square(60.0, 60.0), "diagonal");
        nav.register(square(100.0, 0.0), "aligned");
        nav.focus_item(0);
        let change = nav.move_focus(Direction::Right);
        assert_eq!(change.map(|c| c.focused), Some("aligned"));
    }

    #[test]
    fn test_move_reports_blur_and_focus_pair() {
        let mut nav = row_of_three();
        nav.focus_item(0);
        let change = nav.move_focus(Direction::Right);
        assert_eq!(
            change,
            Some(FocusChange { blurred: Some("left"), focused: "middle" })
        );
    }

    #[test]
    fn test_at_most_one_focused_through_sequence() {
        let targets = ["left", "middle", "right"];
        let mut nav = row_of_three();
        assert_single_focus(&nav, &targets);
        nav.focus_item(0);
        assert_single_focus(&nav, &targets);
        nav.move_focus(Direction::Right);
        assert_single_focus(&nav, &targets);
        nav.move_focus(Direction::Down);
        assert_single_focus(&nav, &targets);
        nav.unregister(&"middle");
        assert_single_focus(&nav, &targets);
        nav.focus_item(1);
        assert_single_focus(&nav, &targets);
        nav.clear();
        assert_single_focus(&nav, &targets);
    }
}
