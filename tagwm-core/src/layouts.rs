//! Arrangement algorithms for a monitor's tiled clients.
pub mod monocle;
pub mod tile;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Every layout, in the order they are offered by default.
pub const LAYOUTS: [Layout; 3] = [Layout::Tile, Layout::Floating, Layout::Monocle];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// A master column on the left and a stack on the right.
    #[default]
    Tile,
    /// Clients keep whatever geometry they have.
    Floating,
    /// Every tiled client fills the usable area.
    Monocle,
}

impl Layout {
    /// The symbol shown in the bar while this layout is active.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Tile => "[]=",
            Self::Floating => "><>",
            Self::Monocle => "[M]",
        }
    }

    /// Whether the layout assigns geometry to clients.
    #[must_use]
    pub const fn arranges(self) -> bool {
        !matches!(self, Self::Floating)
    }
}

#[derive(Debug, Error)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tile" | "[]=" => Ok(Self::Tile),
            "Floating" | "><>" => Ok(Self::Floating),
            "Monocle" | "[M]" => Ok(Self::Monocle),
            _ => Err(ParseLayoutError(s.to_owned())),
        }
    }
}
