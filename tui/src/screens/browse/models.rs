use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Rect;
use zapper_nav::{Direction, FocusNavigator};

use crate::catalog::Catalog;
use crate::screens::types::ScreenCommand;
use crate::screens::{to_bounds, ScreenFocus};

pub const MENU_WIDTH: u16 = 20;
pub const MENU_ROW_STEP: u16 = 2;
pub const TILE_WIDTH: u16 = 22;
pub const TILE_HEIGHT: u16 = 5;
pub const TILE_GAP_X: u16 = 2;
pub const TILE_GAP_Y: u16 = 1;
pub const DETAIL_HEIGHT: u16 = 5;

const TILE_ROW_STEP: u16 = TILE_HEIGHT + TILE_GAP_Y;

/// A focusable element on the browse screen: a category row in the side
/// menu or a video tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseTarget {
    MenuRow(usize),
    Tile(usize),
}

/// State of the browse screen: the side menu of categories, the tile grid
/// of the selected category and one navigator covering both. Menu rows are
/// registered before tiles, so the first focus of the screen lands on the
/// first category row.
pub struct BrowseState {
    pub navigator: FocusNavigator<BrowseTarget>,
    pub selected_category: usize,
    /// First tile row currently scrolled into view
    pub scroll_row: u16,
    menu_count: usize,
    tile_count: usize,
    menu_area: Rect,
    grid_area: Rect,
    detail_area: Rect,
    columns: u16,
    layout_area: Option<Rect>,
    initialized: bool,
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            navigator: FocusNavigator::new(),
            selected_category: 0,
            scroll_row: 0,
            menu_count: 0,
            tile_count: 0,
            menu_area: Rect::default(),
            grid_area: Rect::default(),
            detail_area: Rect::default(),
            columns: 1,
            layout_area: None,
            initialized: false,
        }
    }

    /// Recomputes geometry and rebuilds the registry when the available
    /// area changes. Focus is restored to the same target afterwards.
    pub fn ensure_layout(&mut self, area: Rect, catalog: &Catalog) {
        if self.layout_area == Some(area) {
            return;
        }
        let menu_width = MENU_WIDTH.min(area.width / 3);
        self.menu_area = Rect::new(area.x, area.y, menu_width, area.height);
        let right_x = area.x + menu_width + 1;
        let right_width = area.width.saturating_sub(menu_width + 1);
        let detail_height = DETAIL_HEIGHT.min(area.height / 2);
        let grid_height = area.height.saturating_sub(detail_height);
        self.grid_area = Rect::new(right_x, area.y, right_width, grid_height);
        self.detail_area = Rect::new(right_x, area.y + grid_height, right_width, detail_height);
        self.columns = ((right_width + TILE_GAP_X) / (TILE_WIDTH + TILE_GAP_X)).max(1);
        self.layout_area = Some(area);

        let focused = self.navigator.focused().copied();
        self.navigator.clear();
        self.menu_count = catalog.categories.len();
        for index in 0..self.menu_count {
            self.navigator
                .register(to_bounds(self.menu_rect(index)), BrowseTarget::MenuRow(index));
        }
        self.register_tiles(catalog);
        match focused {
            Some(target) => {
                self.navigator.focus_target(&target);
            }
            None if !self.initialized => {
                self.navigator.focus_item(0);
                self.initialized = true;
            }
            None => {}
        }
    }

    /// Switches the grid to another category. Only the tiles are
    /// re-registered; menu rows and the current focus stay put. An unknown
    /// index changes nothing.
    pub fn change_category(&mut self, index: usize, catalog: &Catalog) {
        if catalog.category(index).is_none() {
            return;
        }
        for tile in 0..self.tile_count {
            self.navigator.unregister(&BrowseTarget::Tile(tile));
        }
        self.selected_category = index;
        self.register_tiles(catalog);
        self.scroll_row = 0;
        log::debug!("category changed to {}", index);
    }

    fn register_tiles(&mut self, catalog: &Catalog) {
        let count = catalog.videos(self.selected_category).len();
        for index in 0..count {
            self.navigator
                .register(to_bounds(self.tile_rect(index)), BrowseTarget::Tile(index));
        }
        self.tile_count = count;
    }

    pub fn menu_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.menu_area.x,
            self.menu_area.y + index as u16 * MENU_ROW_STEP,
            self.menu_area.width,
            1,
        )
    }

    /// Tile bounds in unscrolled coordinates; rendering subtracts the
    /// scroll offset.
    pub fn tile_rect(&self, index: usize) -> Rect {
        let column = (index as u16) % self.columns;
        let row = (index as u16) / self.columns;
        Rect::new(
            self.grid_area.x + column * (TILE_WIDTH + TILE_GAP_X),
            self.grid_area.y + row * TILE_ROW_STEP,
            TILE_WIDTH.min(self.grid_area.width),
            TILE_HEIGHT,
        )
    }

    pub fn menu_area(&self) -> Rect {
        self.menu_area
    }

    pub fn grid_area(&self) -> Rect {
        self.grid_area
    }

    pub fn detail_area(&self) -> Rect {
        self.detail_area
    }

    /// Rows of cells the grid is scrolled past
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_row * TILE_ROW_STEP
    }

    pub fn menu_count(&self) -> usize {
        self.menu_count
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn visible_rows(&self) -> u16 {
        (self.grid_area.height / TILE_ROW_STEP).max(1)
    }

    fn scroll_to_tile(&mut self, index: usize) {
        let row = (index as u16) / self.columns;
        let visible = self.visible_rows();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFocus for BrowseState {
    fn focused_element(&self) -> String {
        match self.navigator.focused() {
            Some(BrowseTarget::MenuRow(index)) => format!("category {}", index),
            Some(BrowseTarget::Tile(index)) => format!("video tile {}", index),
            None => "nothing".to_string(),
        }
    }

    fn handle_navigation(&mut self, key: KeyCode) -> bool {
        let direction = match key {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            _ => return false,
        };
        match self.navigator.move_focus(direction) {
            Some(change) => {
                if let BrowseTarget::Tile(index) = change.focused {
                    self.scroll_to_tile(index);
                }
                true
            }
            None => false,
        }
    }

    fn activate(&mut self) -> Option<ScreenCommand> {
        match self.navigator.focused()? {
            BrowseTarget::MenuRow(index) => Some(ScreenCommand::ShowCategory(*index)),
            BrowseTarget::Tile(index) => Some(ScreenCommand::OpenVideo {
                category: self.selected_category,
                item: *index,
            }),
        }
    }

    fn has_focusable_elements(&self) -> bool {
        !self.navigator.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Video};

    fn test_area() -> Rect {
        Rect::new(0, 1, 80, 22)
    }

    fn clip(n: usize) -> Video {
        Video {
            title: format!("Clip {}", n),
            description: "Test clip".to_string(),
            url: format!("http://example.com/{}.mp4", n),
            duration_secs: 60,
        }
    }

    fn catalog_with(counts: &[usize]) -> Catalog {
        Catalog {
            categories: counts
                .iter()
                .enumerate()
                .map(|(i, &count)| Category {
                    name: format!("Category {}", i),
                    videos: (0..count).map(clip).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_layout_focuses_first_menu_row() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::MenuRow(0)));
    }

    #[test]
    fn test_menu_rows_register_before_tiles() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        assert_eq!(browse.navigator.index_of(&BrowseTarget::MenuRow(0)), Some(0));
        assert_eq!(browse.navigator.index_of(&BrowseTarget::Tile(0)), Some(2));
        assert_eq!(browse.navigator.len(), 6);
    }

    #[test]
    fn test_right_from_menu_enters_the_grid() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        assert!(browse.handle_navigation(KeyCode::Right));
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::Tile(0)));
    }

    #[test]
    fn test_down_walks_the_menu() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        assert!(browse.handle_navigation(KeyCode::Down));
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::MenuRow(1)));
        assert!(browse.handle_navigation(KeyCode::Up));
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::MenuRow(0)));
    }

    #[test]
    fn test_category_switch_reregisters_only_tiles() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        browse.change_category(1, &catalog);
        assert_eq!(browse.selected_category, 1);
        assert_eq!(browse.tile_count(), 2);
        // Menu rows keep their slots and tiles follow them again
        assert_eq!(browse.navigator.index_of(&BrowseTarget::MenuRow(1)), Some(1));
        assert_eq!(browse.navigator.index_of(&BrowseTarget::Tile(0)), Some(2));
        assert_eq!(browse.navigator.len(), 4);
        // Focus stayed on the menu row that was active
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::MenuRow(0)));
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        browse.change_category(9, &catalog);
        assert_eq!(browse.selected_category, 0);
        assert_eq!(browse.tile_count(), 4);
    }

    #[test]
    fn test_activation_reports_the_focused_element() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        assert_eq!(browse.activate(), Some(ScreenCommand::ShowCategory(0)));
        browse.handle_navigation(KeyCode::Right);
        assert_eq!(
            browse.activate(),
            Some(ScreenCommand::OpenVideo { category: 0, item: 0 })
        );
    }

    #[test]
    fn test_resize_restores_focus_target() {
        let catalog = catalog_with(&[4, 2]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        browse.handle_navigation(KeyCode::Right);
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::Tile(0)));
        browse.ensure_layout(Rect::new(0, 1, 120, 40), &catalog);
        assert_eq!(browse.navigator.focused(), Some(&BrowseTarget::Tile(0)));
    }

    #[test]
    fn test_scroll_follows_deep_tiles() {
        let catalog = catalog_with(&[12]);
        let mut browse = BrowseState::new();
        browse.ensure_layout(test_area(), &catalog);
        let last = browse.tile_count() - 1;
        browse.scroll_to_tile(last);
        let last_row = (last as u16) / browse.columns;
        assert!(browse.scroll_row + browse.visible_rows() > last_row);
        browse.scroll_to_tile(0);
        assert_eq!(browse.scroll_row, 0);
    }
}
