use crate::models::dto::BarState;
use crate::models::{Handle, MonitorId, WindowChanges, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Normal,
    Focused,
}

/// ICCCM window state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientState {
    Withdrawn,
    Normal,
    Iconic,
}

/// The window a client is stacked directly under.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sibling<H: Handle> {
    Bar(MonitorId),
    #[serde(bound = "")]
    Window(WindowHandle<H>),
}

/// These are responses from the window manager.
/// The display server should act on these actions.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Commit a client geometry. `geometry` excludes the border.
    #[serde(bound = "")]
    MoveResizeWindow {
        window: WindowHandle<H>,
        geometry: Xyhw,
        border: i32,
    },

    /// Move a window without resizing it, used to hide clients off screen.
    #[serde(bound = "")]
    MoveWindow(WindowHandle<H>, i32, i32),

    /// Tell a client its geometry even though nothing changed.
    #[serde(bound = "")]
    ConfigureNotify {
        window: WindowHandle<H>,
        geometry: Xyhw,
        border: i32,
    },

    /// Pass a configure request of an unmanaged window through untouched.
    #[serde(bound = "")]
    ConfigureWindow(WindowHandle<H>, WindowChanges<H>),

    #[serde(bound = "")]
    SetBorderWidth(WindowHandle<H>, i32),

    #[serde(bound = "")]
    SetBorderColor(WindowHandle<H>, BorderColor),

    /// Grab pointer buttons on a client; `focused` clients only get the bound combinations.
    #[serde(bound = "")]
    GrabButtons(WindowHandle<H>, bool),

    /// Raises a given window.
    #[serde(bound = "")]
    MoveToTop(WindowHandle<H>),

    /// Stack a window directly below a sibling.
    #[serde(bound = "")]
    StackBelow(WindowHandle<H>, Sibling<H>),

    /// Tell a window that it is to become focused.
    #[serde(bound = "")]
    WindowTakeFocus {
        window: WindowHandle<H>,
        set_input_focus: bool,
    },

    /// Remove focus on any visible window by focusing the root window.
    Unfocus,

    #[serde(bound = "")]
    SetUrgent(WindowHandle<H>, bool),

    #[serde(bound = "")]
    SetFullscreen(WindowHandle<H>, bool),

    #[serde(bound = "")]
    SetClientState(WindowHandle<H>, ClientState),

    #[serde(bound = "")]
    MapWindow(WindowHandle<H>),

    /// Nicely ask a window if it would please close at its convenience.
    #[serde(bound = "")]
    KillWindow(WindowHandle<H>),

    /// Stop managing a window that still exists, restoring its border.
    #[serde(bound = "")]
    ReleaseWindow {
        window: WindowHandle<H>,
        border: i32,
    },

    /// Publish the managed windows in mapping order.
    #[serde(bound = "")]
    SetClientList(Vec<WindowHandle<H>>),

    DrawBar(BarState),

    /// Create the bar of a monitor if needed and move it.
    MoveBar {
        monitor: MonitorId,
        geometry: Xyhw,
    },

    DestroyBar(MonitorId),

    /// Let the client see the click that focused it.
    ReplayClick,

    ReloadKeyGrabs,

    /// Drop pending enter events caused by our own restacking.
    DiscardEnterEvents,
}
