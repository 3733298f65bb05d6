mod keybind;
mod rule;

use crate::layouts::Layout;
pub use keybind::{ClickTarget, Keybind, MouseBinding};
pub use rule::Rule;

/// Settings the window manager reads at startup and on reload.
pub trait Config {
    fn tag_labels(&self) -> Vec<String>;

    fn rules(&self) -> Vec<Rule>;

    fn keybinds(&self) -> Vec<Keybind>;

    fn mouse_bindings(&self) -> Vec<MouseBinding>;

    /// Layouts offered by `SetLayout`; the first two fill a new monitor's slots.
    fn layouts(&self) -> Vec<Layout>;

    fn mfact(&self) -> f32;
    fn nmaster(&self) -> usize;
    /// Distance in pixels within which dragged windows snap to edges.
    fn snap(&self) -> i32;
    fn show_bar(&self) -> bool;
    fn top_bar(&self) -> bool;
    fn bar_height(&self) -> i32;
    fn border_width(&self) -> i32;
    /// Respect size hints even for tiled clients.
    fn resize_hints(&self) -> bool;
    /// Refuse to move focus away from a fullscreen client.
    fn lock_fullscreen(&self) -> bool;
    fn default_border_color(&self) -> String;
    fn focused_border_color(&self) -> String;
    /// `strftime` style format of the clock shown when there is no status text.
    fn clock_format(&self) -> String;

    /// Read the configuration again from its source.
    ///
    /// Returns `None` when the source cannot be read, in which case the
    /// current settings stay in effect.
    fn reload(&self) -> Option<Self>
    where
        Self: Sized;
}
