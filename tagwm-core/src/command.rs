use crate::layouts::Layout;
use crate::models::TagSet;
use serde::{Deserialize, Serialize};

/// User actions bound to keys and buttons.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    /// Run a shell command line detached from the window manager.
    Execute(String),
    ToggleBar,
    /// Move focus through the visible clients, forward when positive.
    FocusStack(i32),
    IncNMaster(i32),
    /// Values below 1.0 are added to the current factor, larger ones set it to `value - 1.0`.
    SetMFact(f32),
    Zoom,
    View(TagSet),
    ToggleView(TagSet),
    Tag(TagSet),
    ToggleTag(TagSet),
    KillClient,
    /// `None` switches back to the previous layout.
    SetLayout(Option<Layout>),
    ToggleFloating,
    FocusMonitor(i32),
    TagMonitor(i32),
    MoveMouse,
    ResizeMouse,
    ToggleMinimize,
    ReloadConfig,
    Quit,
}

impl Command {
    /// Tag bar bindings with an empty tag set act on the tag that was clicked.
    #[must_use]
    pub fn with_clicked_tag(self, clicked: TagSet) -> Self {
        match self {
            Self::View(set) if set.is_empty() => Self::View(clicked),
            Self::ToggleView(set) if set.is_empty() => Self::ToggleView(clicked),
            Self::Tag(set) if set.is_empty() => Self::Tag(clicked),
            Self::ToggleTag(set) if set.is_empty() => Self::ToggleTag(clicked),
            other => other,
        }
    }
}
