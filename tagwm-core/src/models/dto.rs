//! Snapshots handed to the display server for painting the bar.
use serde::{Deserialize, Serialize};

use super::{MonitorId, Xyhw};

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagState {
    pub label: String,
    /// Shown on the monitor.
    pub selected: bool,
    /// Some client on the monitor carries the tag.
    pub occupied: bool,
    /// Some client carrying the tag is urgent.
    pub urgent: bool,
    /// The selected client carries the tag.
    pub focused: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TitleState {
    pub text: String,
    pub floating: bool,
    pub fixed: bool,
}

/// Everything one monitor's bar shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BarState {
    pub monitor: MonitorId,
    pub geometry: Xyhw,
    pub tags: Vec<TagState>,
    pub layout_symbol: String,
    /// Title of the monitor's selected client, if any.
    pub title: Option<TitleState>,
    /// Status text; only the selected monitor shows one.
    pub status: Option<String>,
    pub selected_monitor: bool,
}
