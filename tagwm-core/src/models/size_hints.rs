use serde::{Deserialize, Serialize};

/// Size constraints as the display server reports them for a window.
/// Absent fields place no constraint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalHints {
    pub base: Option<(i32, i32)>,
    pub min: Option<(i32, i32)>,
    pub max: Option<(i32, i32)>,
    pub increment: Option<(i32, i32)>,
    /// Minimum and maximum aspect, each as a `(numerator, denominator)` pair.
    pub aspect: Option<((i32, i32), (i32, i32))>,
}

/// Normalized size constraints used by the geometry solver. Zero means unset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHints {
    pub base_w: i32,
    pub base_h: i32,
    pub inc_w: i32,
    pub inc_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub min_w: i32,
    pub min_h: i32,
    /// Height over width lower bound.
    pub min_aspect: f32,
    /// Width over height upper bound.
    pub max_aspect: f32,
}

fn positive(pair: Option<(i32, i32)>) -> Option<(i32, i32)> {
    pair.map(|(a, b)| (a.max(0), b.max(0)))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(num: i32, den: i32) -> f32 {
    if num <= 0 || den <= 0 {
        return 0.0;
    }
    num as f32 / den as f32
}

/// Pulls `max` down onto the `base + k * inc` grid unless that would drop below `min`.
fn align_max(max: i32, base: i32, inc: i32, min: i32) -> i32 {
    if max <= 0 || inc <= 0 || max <= base {
        return max;
    }
    let aligned = max - (max - base) % inc;
    if aligned >= min {
        aligned
    } else {
        max
    }
}

impl From<&NormalHints> for SizeHints {
    fn from(hints: &NormalHints) -> Self {
        let base = positive(hints.base);
        let min = positive(hints.min);
        let (base_w, base_h) = base.or(min).unwrap_or_default();
        let (min_w, min_h) = min.or(base).unwrap_or_default();
        let (inc_w, inc_h) = positive(hints.increment).unwrap_or_default();
        let (max_w, max_h) = positive(hints.max).unwrap_or_default();
        let (min_aspect, max_aspect) = match hints.aspect {
            Some(((min_x, min_y), (max_x, max_y))) => (ratio(min_y, min_x), ratio(max_x, max_y)),
            None => (0.0, 0.0),
        };
        Self {
            base_w,
            base_h,
            inc_w,
            inc_h,
            max_w: align_max(max_w, base_w, inc_w, min_w),
            max_h: align_max(max_h, base_h, inc_h, min_h),
            min_w,
            min_h,
            min_aspect,
            max_aspect,
        }
    }
}

impl SizeHints {
    /// A window whose maximum equals its minimum cannot be resized.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.max_w > 0 && self.max_h > 0 && self.max_w == self.min_w && self.max_h == self.min_h
    }

    /// Applies base size, aspect, increment and min/max constraints to a size.
    ///
    /// Sizes are kept at or above `floor` unless the maximum is smaller. The
    /// result is a fixed point: constraining it again returns it unchanged.
    #[must_use]
    pub fn constrain(&self, w: i32, h: i32, floor: i32) -> (i32, i32) {
        let lower = (
            lower_bound(self.min_w, self.max_w, floor),
            lower_bound(self.min_h, self.max_h, floor),
        );
        let mut size = self.step(w, h, lower);
        // Inside the bounds a step never grows either side, so this settles.
        loop {
            let next = self.step(size.0, size.1, lower);
            if next == size {
                return size;
            }
            size = next;
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn step(&self, w: i32, h: i32, (lower_w, lower_h): (i32, i32)) -> (i32, i32) {
        let mut w = clamp_below(w.max(lower_w), self.max_w);
        let mut h = clamp_below(h.max(lower_h), self.max_h);
        // Aspect works on the full size when base and min coincide.
        let base_is_min = self.base_w == self.min_w && self.base_h == self.min_h;
        if !base_is_min {
            w -= self.base_w;
            h -= self.base_h;
        }
        if self.min_aspect > 0.0 && self.max_aspect > 0.0 && w > 0 && h > 0 {
            if self.max_aspect < w as f32 / h as f32 {
                w = (h as f32 * self.max_aspect + 0.5) as i32;
            }
            if w > 0 && self.min_aspect < h as f32 / w as f32 {
                h = (w as f32 * self.min_aspect + 0.5) as i32;
            }
        }
        if base_is_min {
            w -= self.base_w;
            h -= self.base_h;
        }
        if self.inc_w > 0 && w > 0 {
            w -= w % self.inc_w;
        }
        if self.inc_h > 0 && h > 0 {
            h -= h % self.inc_h;
        }
        ((w + self.base_w).max(lower_w), (h + self.base_h).max(lower_h))
    }
}

/// The smallest size allowed, never above a set maximum.
fn lower_bound(min: i32, max: i32, floor: i32) -> i32 {
    clamp_below(min.max(floor), max)
}

fn clamp_below(value: i32, max: i32) -> i32 {
    if max > 0 {
        value.min(max)
    } else {
        value
    }
}
