//! Reconciles a proposed client rectangle with the client's size hints and
//! the bounds of the screen.
use crate::models::{SizeHints, Xyhw};

/// Everything the solver needs to know about one client and where it lives.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveContext {
    /// Hints to honour, or `None` when the layout overrides them.
    pub hints: Option<SizeHints>,
    /// Last committed geometry of the client, without border.
    pub current: Xyhw,
    pub border: i32,
    /// Bounds of the whole root window.
    pub display: Xyhw,
    /// Usable area of the client's monitor.
    pub usable: Xyhw,
    pub bar_height: i32,
}

impl SolveContext {
    fn outer_width(&self) -> i32 {
        (self.current.w + 2 * self.border).max(1)
    }

    fn outer_height(&self) -> i32 {
        (self.current.h + 2 * self.border).max(1)
    }
}

/// Corrects `proposed` and reports whether it differs from the committed geometry.
///
/// Sizes never drop below one pixel or below the bar height, unless the
/// hints cap them lower. Interactive requests are then kept partly on the
/// display, others partly on the monitor's usable area. Solving a solved
/// rectangle again changes nothing.
#[must_use]
pub fn solve(ctx: &SolveContext, proposed: Xyhw, interactive: bool) -> (Xyhw, bool) {
    let Xyhw { mut x, mut y, w, h } = proposed;
    let (w, h) = match &ctx.hints {
        Some(hints) => hints.constrain(w.max(1), h.max(1), ctx.bar_height.max(1)),
        None => (w.max(ctx.bar_height).max(1), h.max(ctx.bar_height).max(1)),
    };
    let bounds = if interactive { ctx.display } else { ctx.usable };
    if interactive {
        if x > bounds.right() {
            x = bounds.right() - ctx.outer_width();
        }
        if y > bounds.bottom() {
            y = bounds.bottom() - ctx.outer_height();
        }
        if x + w + 2 * ctx.border < bounds.x {
            x = bounds.x;
        }
        if y + h + 2 * ctx.border < bounds.y {
            y = bounds.y;
        }
    } else {
        if x >= bounds.right() {
            x = bounds.right() - ctx.outer_width();
        }
        if y >= bounds.bottom() {
            y = bounds.bottom() - ctx.outer_height();
        }
        if x + w + 2 * ctx.border <= bounds.x {
            x = bounds.x;
        }
        if y + h + 2 * ctx.border <= bounds.y {
            y = bounds.y;
        }
    }
    let solved = Xyhw::new(x, y, w, h);
    (solved, solved != ctx.current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalHints;
    use proptest::prelude::*;

    fn context(hints: Option<SizeHints>) -> SolveContext {
        SolveContext {
            hints,
            current: Xyhw::new(100, 100, 200, 200),
            border: 1,
            display: Xyhw::new(0, 0, 1920, 1080),
            usable: Xyhw::new(0, 20, 1920, 1060),
            bar_height: 20,
        }
    }

    #[test]
    fn fixed_client_keeps_its_size() {
        let hints = SizeHints::from(&NormalHints {
            min: Some((300, 200)),
            max: Some((300, 200)),
            ..NormalHints::default()
        });
        let ctx = context(Some(hints));
        let (rect, changed) = solve(&ctx, Xyhw::new(100, 100, 400, 400), false);
        assert_eq!(rect, Xyhw::new(100, 100, 300, 200));
        assert!(changed);
    }

    #[test]
    fn unchanged_rectangle_is_reported() {
        let ctx = context(None);
        let (rect, changed) = solve(&ctx, ctx.current, false);
        assert_eq!(rect, ctx.current);
        assert!(!changed);
    }

    fn arbitrary_pair(range: std::ops::Range<i32>) -> impl Strategy<Value = Option<(i32, i32)>> {
        proptest::option::of((range.clone(), range))
    }

    prop_compose! {
        fn arbitrary_hints()(
            base in arbitrary_pair(0..60),
            min in arbitrary_pair(0..200),
            max in arbitrary_pair(1..800),
            increment in arbitrary_pair(1..40),
            aspect in proptest::option::of(((1..6, 1..6), (1..6, 1..6))),
        ) -> SizeHints {
            SizeHints::from(&NormalHints { base, min, max, increment, aspect })
        }
    }

    prop_compose! {
        fn arbitrary_rect()(
            x in -3000..3000i32,
            y in -3000..3000i32,
            w in -20..3000i32,
            h in -20..3000i32,
        ) -> Xyhw {
            Xyhw::new(x, y, w, h)
        }
    }

    proptest! {
        #[test]
        fn solving_twice_is_stable(
            hints in proptest::option::of(arbitrary_hints()),
            current in arbitrary_rect(),
            proposed in arbitrary_rect(),
            border in 0..5i32,
            bar_height in 0..30i32,
            interactive in any::<bool>(),
        ) {
            let mut ctx = SolveContext {
                hints,
                current,
                border,
                bar_height,
                ..context(None)
            };
            let (first, _) = solve(&ctx, proposed, interactive);
            ctx.current = first;
            let (second, changed) = solve(&ctx, first, interactive);
            prop_assert_eq!(first, second);
            prop_assert!(!changed);
            prop_assert!(first.w >= 1 && first.h >= 1);
        }
    }

    #[test]
    fn conflicting_aspect_and_increments_settle() {
        let hints = SizeHints::from(&NormalHints {
            min: Some((30, 40)),
            max: Some((238, 107)),
            increment: Some((3, 10)),
            aspect: Some(((1, 2), (1, 1))),
            ..NormalHints::default()
        });
        let mut ctx = context(Some(hints));
        let (first, _) = solve(&ctx, Xyhw::new(50, 60, 1100, 115), false);
        ctx.current = first;
        assert_eq!(solve(&ctx, first, false), (first, false));
    }

    #[test]
    fn max_below_the_increment_grid_settles() {
        let hints = SizeHints::from(&NormalHints {
            base: Some((8, 33)),
            min: Some((24, 37)),
            max: Some((436, 42)),
            increment: Some((20, 19)),
            ..NormalHints::default()
        });
        let mut ctx = context(Some(hints));
        let (first, _) = solve(&ctx, Xyhw::new(50, 60, 500, 500), false);
        assert_eq!(first.h, 37);
        ctx.current = first;
        assert_eq!(solve(&ctx, first, false), (first, false));
    }

    #[test]
    fn sizes_have_a_floor() {
        let ctx = context(None);
        let (rect, _) = solve(&ctx, Xyhw::new(10, 30, -5, 0), false);
        assert_eq!((rect.w, rect.h), (20, 20));
    }

    #[test]
    fn placement_stays_on_usable_area() {
        let ctx = context(None);
        let (rect, _) = solve(&ctx, Xyhw::new(5000, 40, 100, 100), false);
        assert_eq!(rect.x, 1920 - 202);
        let (rect, _) = solve(&ctx, Xyhw::new(-500, -500, 100, 100), false);
        assert_eq!((rect.x, rect.y), (0, 20));
    }

    #[test]
    fn interactive_placement_may_leave_usable_area() {
        let ctx = context(None);
        let (rect, _) = solve(&ctx, Xyhw::new(-150, 0, 200, 200), true);
        assert_eq!((rect.x, rect.y), (-150, 0));
        let (rect, _) = solve(&ctx, Xyhw::new(-250, 0, 200, 200), true);
        assert_eq!(rect.x, 0);
    }
}
