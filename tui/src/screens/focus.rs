use ratatui::crossterm::event::KeyCode;

use crate::screens::types::ScreenCommand;

/// Focus behavior every screen provides. Arrow keys feed the screen's
/// spatial navigator; Enter asks the screen what its focused element wants
/// done. The same two paths serve the host's d-pad in embedded mode.
pub trait ScreenFocus {
    /// Name of the focused element, for the footer and debug panel
    fn focused_element(&self) -> String;

    /// Handle a navigation key. Returns true when the key moved focus.
    fn handle_navigation(&mut self, key: KeyCode) -> bool;

    /// Activate the focused element
    fn activate(&mut self) -> Option<ScreenCommand>;

    /// Whether this screen currently has focusable elements
    fn has_focusable_elements(&self) -> bool;
}
