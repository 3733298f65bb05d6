use crate::models::Xyhw;

/// Master and stack layout.
///
/// The first `nmaster` clients share a left column `mfact` of the width, the
/// rest share the right column. Rows are handed out top to bottom, each one
/// dividing what is left of its column evenly among the remaining clients,
/// so a client that refuses its height does not leave a gap.
///
/// `place` receives each proposed outer rectangle and returns the outer
/// rectangle actually committed.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn update<T: Copy>(
    area: Xyhw,
    mfact: f32,
    nmaster: usize,
    tiled: &[T],
    mut place: impl FnMut(T, Xyhw) -> Xyhw,
) {
    let count = tiled.len();
    if count == 0 {
        return;
    }
    let master_width = if count > nmaster {
        if nmaster > 0 {
            (area.w as f32 * mfact) as i32
        } else {
            0
        }
    } else {
        area.w
    };
    let masters = count.min(nmaster);
    let mut master_y = 0;
    let mut stack_y = 0;
    for (i, item) in tiled.iter().enumerate() {
        if i < nmaster {
            let h = (area.h - master_y) / (masters - i) as i32;
            let placed = place(*item, Xyhw::new(area.x, area.y + master_y, master_width, h));
            if master_y + placed.h < area.h {
                master_y += placed.h;
            }
        } else {
            let h = (area.h - stack_y) / (count - i) as i32;
            let rect = Xyhw::new(
                area.x + master_width,
                area.y + stack_y,
                area.w - master_width,
                h,
            );
            let placed = place(*item, rect);
            if stack_y + placed.h < area.h {
                stack_y += placed.h;
            }
        }
    }
}
