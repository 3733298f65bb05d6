use serde::{Deserialize, Serialize};

use super::{Handle, NormalHints, WindowHandle, WindowType, WmHints};

/// A property of a window (or the root window) changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum WindowChange<H: Handle> {
    /// The root window title, used as the status text.
    RootName(Option<String>),
    #[serde(bound = "")]
    Title(WindowHandle<H>, Option<String>),
    #[serde(bound = "")]
    TransientFor(WindowHandle<H>, Option<WindowHandle<H>>),
    #[serde(bound = "")]
    NormalHints(WindowHandle<H>, NormalHints),
    #[serde(bound = "")]
    WmHints(WindowHandle<H>, WmHints),
    /// The window type changed, along with whether the state asks for fullscreen.
    #[serde(bound = "")]
    WindowType(WindowHandle<H>, WindowType, bool),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

/// A message a client sent to the root window about itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRequest {
    Fullscreen(StateAction),
    /// The client asks to be activated.
    Activate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode {
    Above,
    Below,
    TopIf,
    BottomIf,
    Opposite,
}

/// The fields a window asked to configure. Absent fields were not requested.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowChanges<H: Handle> {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub border: Option<i32>,
    #[serde(bound = "")]
    pub sibling: Option<WindowHandle<H>>,
    pub stack_mode: Option<StackMode>,
}

impl<H: Handle> WindowChanges<H> {
    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    #[must_use]
    pub const fn has_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}
