use serde::{Deserialize, Serialize};

/// A rectangle in root window coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Area shared by both rectangles, zero when they do not overlap.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> i32 {
        let w = 0.max(self.right().min(other.right()) - self.x.max(other.x));
        let h = 0.max(self.bottom().min(other.bottom()) - self.y.max(other.y));
        w * h
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// The same rectangle grown by `border` pixels on every side of its size.
    #[must_use]
    pub const fn outer(&self, border: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            w: self.w + 2 * border,
            h: self.h + 2 * border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rectangles_share_area() {
        let a = Xyhw::new(0, 0, 100, 100);
        let b = Xyhw::new(50, 50, 100, 100);
        assert_eq!(a.intersection_area(&b), 2500);
        assert_eq!(b.intersection_area(&a), 2500);
    }

    #[test]
    fn disjoint_rectangles_share_nothing() {
        let a = Xyhw::new(0, 0, 100, 100);
        let b = Xyhw::new(100, 0, 100, 100);
        assert_eq!(a.intersection_area(&b), 0);
        let c = Xyhw::new(500, 500, 10, 10);
        assert_eq!(a.intersection_area(&c), 0);
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let a = Xyhw::new(10, 10, 10, 10);
        assert!(a.contains_point(10, 10));
        assert!(a.contains_point(19, 19));
        assert!(!a.contains_point(20, 15));
        assert!(!a.contains_point(15, 9));
    }

    #[test]
    fn outer_adds_border_twice() {
        let a = Xyhw::new(5, 5, 100, 50).outer(2);
        assert_eq!(a, Xyhw::new(5, 5, 104, 54));
        assert_eq!(a.center(), (57, 32));
    }
}
