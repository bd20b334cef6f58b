/// An element's bounding rectangle in screen coordinates.
///
/// The coordinate space has its origin at the top-left with y growing
/// downward. All registered elements must share one space; elements inside
/// a scrollable region are measured against the scroll content, not the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.right(), 110.0);
        assert_eq!(bounds.bottom(), 70.0);
    }

    #[test]
    fn test_center() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.center_x(), 60.0);
        assert_eq!(bounds.center_y(), 45.0);
    }

    #[test]
    fn test_zero_size() {
        let bounds = Bounds::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(bounds.right(), 5.0);
        assert_eq!(bounds.center_y(), 5.0);
    }
}
