pub mod bounds;
pub mod direction;
pub mod distance;
pub mod navigator;

pub use bounds::Bounds;
pub use direction::Direction;
pub use navigator::{FocusChange, FocusNavigator};
