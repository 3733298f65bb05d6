use crate::models::WindowHandle;
use serde::{Deserialize, Serialize};

use super::client::Handle;

/// What the pointer is currently doing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode<H: Handle> {
    #[serde(bound = "")]
    ResizingWindow(WindowHandle<H>),
    #[serde(bound = "")]
    MovingWindow(WindowHandle<H>),
    Normal,
}

impl<H: Handle> Default for Mode<H> {
    fn default() -> Self {
        Self::Normal
    }
}
