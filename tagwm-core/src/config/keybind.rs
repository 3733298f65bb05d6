use serde::{Deserialize, Serialize};

use crate::utils::modmask_lookup::{into_modmask, Button, ModMask};
use crate::Command;

/// A key chord and the command it runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub command: Command,
    pub modifier: Vec<String>,
    /// Keysym name, such as `Return` or `j`.
    pub key: String,
}

impl Keybind {
    #[must_use]
    pub fn modmask(&self) -> ModMask {
        into_modmask(&self.modifier)
    }
}

/// Where a pointer button was pressed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    TagBar,
    LtSymbol,
    StatusText,
    WinTitle,
    ClientWin,
    RootWin,
}

/// A pointer chord on a click target and the command it runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MouseBinding {
    pub click: ClickTarget,
    pub modifier: Vec<String>,
    pub button: Button,
    pub command: Command,
}

impl MouseBinding {
    #[must_use]
    pub fn modmask(&self) -> ModMask {
        into_modmask(&self.modifier)
    }
}
