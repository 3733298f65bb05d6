use crate::models::{
    ClientRequest, Handle, MonitorId, WindowChange, WindowChanges, WindowHandle, WindowInfo, Xyhw,
};
use crate::utils::modmask_lookup::{Button, ModMask};

/// What a pointer or expose event happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<H: Handle> {
    Root,
    Bar(MonitorId),
    Window(WindowHandle<H>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent<H: Handle> {
    pub target: Target<H>,
    pub modmask: ModMask,
    pub button: Button,
    /// Pointer position relative to the target, used for bar clicks.
    pub x: i32,
    pub root_x: i32,
    pub root_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion<H: Handle> {
    pub target: Target<H>,
    pub x: i32,
    pub y: i32,
    /// Server time in milliseconds.
    pub time: u64,
}

/// The output layout as the display server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Topology {
    /// Bounds of the root window.
    pub display: Xyhw,
    /// One rectangle per output, possibly with duplicates for mirrored outputs.
    pub screens: Vec<Xyhw>,
}

/// Notifications from the display server.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    ButtonPress(ButtonEvent<H>),
    ButtonRelease(ButtonEvent<H>),
    ClientMessage(WindowHandle<H>, ClientRequest),
    ConfigureNotify(Topology),
    ConfigureRequest(WindowHandle<H>, WindowChanges<H>),
    CreateNotify(WindowHandle<H>),
    DestroyNotify(WindowHandle<H>),
    EnterNotify { target: Target<H>, normal: bool },
    Expose(Target<H>),
    FocusIn(WindowHandle<H>),
    FocusOut(WindowHandle<H>),
    KeyPress(ModMask, String),
    KeyRelease(ModMask, String),
    LeaveNotify(Target<H>),
    MapNotify(WindowHandle<H>),
    MapRequest(WindowInfo<H>),
    MappingNotify { keyboard: bool },
    MotionNotify(Motion<H>),
    PropertyNotify(WindowChange<H>),
    ReparentNotify(WindowHandle<H>),
    UnmapNotify { window: WindowHandle<H>, synthetic: bool },
}

/// Event types without payload, used to index the handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ButtonPress,
    ButtonRelease,
    ClientMessage,
    ConfigureNotify,
    ConfigureRequest,
    CreateNotify,
    DestroyNotify,
    EnterNotify,
    Expose,
    FocusIn,
    FocusOut,
    KeyPress,
    KeyRelease,
    LeaveNotify,
    MapNotify,
    MapRequest,
    MappingNotify,
    MotionNotify,
    PropertyNotify,
    ReparentNotify,
    UnmapNotify,
}

impl EventKind {
    pub const COUNT: usize = 21;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl<H: Handle> DisplayEvent<H> {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ButtonPress(_) => EventKind::ButtonPress,
            Self::ButtonRelease(_) => EventKind::ButtonRelease,
            Self::ClientMessage(..) => EventKind::ClientMessage,
            Self::ConfigureNotify(_) => EventKind::ConfigureNotify,
            Self::ConfigureRequest(..) => EventKind::ConfigureRequest,
            Self::CreateNotify(_) => EventKind::CreateNotify,
            Self::DestroyNotify(_) => EventKind::DestroyNotify,
            Self::EnterNotify { .. } => EventKind::EnterNotify,
            Self::Expose(_) => EventKind::Expose,
            Self::FocusIn(_) => EventKind::FocusIn,
            Self::FocusOut(_) => EventKind::FocusOut,
            Self::KeyPress(..) => EventKind::KeyPress,
            Self::KeyRelease(..) => EventKind::KeyRelease,
            Self::LeaveNotify(_) => EventKind::LeaveNotify,
            Self::MapNotify(_) => EventKind::MapNotify,
            Self::MapRequest(_) => EventKind::MapRequest,
            Self::MappingNotify { .. } => EventKind::MappingNotify,
            Self::MotionNotify(_) => EventKind::MotionNotify,
            Self::PropertyNotify(_) => EventKind::PropertyNotify,
            Self::ReparentNotify(_) => EventKind::ReparentNotify,
            Self::UnmapNotify { .. } => EventKind::UnmapNotify,
        }
    }
}
