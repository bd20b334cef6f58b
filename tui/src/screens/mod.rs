pub mod browse;
pub mod focus;
pub mod player;
pub mod types;

pub use focus::ScreenFocus;
pub use types::{Screen, ScreenCommand};

use ratatui::layout::Rect;
use zapper_nav::Bounds;

/// Converts a terminal rect into navigator bounds. All screens register
/// against unscrolled cell coordinates, so scrolling a region never moves
/// its registered elements.
pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}
