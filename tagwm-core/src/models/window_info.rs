use serde::{Deserialize, Serialize};

use super::{Handle, NormalHints, WindowHandle, WindowType, Xyhw};

/// Urgency and input flags from a window's WM hints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WmHints {
    pub urgent: bool,
    /// Whether the window accepts input focus, `None` when unset.
    pub input: Option<bool>,
}

impl WmHints {
    /// Windows that explicitly refuse input are never given focus.
    #[must_use]
    pub const fn never_focus(&self) -> bool {
        matches!(self.input, Some(false))
    }
}

/// Everything the display server knows about a window when it asks to be mapped.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WindowInfo<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub geometry: Xyhw,
    pub border: i32,
    pub title: Option<String>,
    pub class: Option<String>,
    pub instance: Option<String>,
    #[serde(bound = "")]
    pub transient_for: Option<WindowHandle<H>>,
    pub normal_hints: NormalHints,
    pub wm_hints: WmHints,
    pub window_type: WindowType,
    /// The window asked for fullscreen through its state property.
    pub fullscreen: bool,
    /// The window set override-redirect and must not be managed.
    pub override_redirect: bool,
    /// The window is currently viewable or iconic.
    pub mapped: bool,
}

/// A plain top-level window for tests.
#[cfg(test)]
pub(crate) fn test_window(id: super::MockHandle) -> WindowInfo<super::MockHandle> {
    WindowInfo {
        handle: WindowHandle(id),
        geometry: Xyhw::new(10, 30, 200, 100),
        title: Some(format!("window {id}")),
        mapped: true,
        ..WindowInfo::default()
    }
}
