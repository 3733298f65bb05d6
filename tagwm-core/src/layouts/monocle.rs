use crate::models::Xyhw;

/// Gives every tiled client the whole usable area.
///
/// `place` receives the outer rectangle each client should occupy.
pub fn update<T: Copy>(area: Xyhw, tiled: &[T], mut place: impl FnMut(T, Xyhw) -> Xyhw) {
    for item in tiled {
        place(*item, area);
    }
}

/// Symbol counting the visible clients, `None` when there are none.
#[must_use]
pub fn symbol(visible: usize) -> Option<String> {
    (visible > 0).then(|| format!("[{visible}]"))
}
