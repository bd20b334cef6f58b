/// A cardinal navigation direction in screen coordinates (y grows downward).
///
/// Diagonal movement is not part of the model. Input adapters map whatever
/// their device reports (arrow keys, d-pad keycodes) onto these four values
/// before calling into the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Whether movement happens along the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether movement goes toward smaller coordinates on its axis.
    pub fn is_reverse(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}
