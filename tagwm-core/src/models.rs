//! Clients, monitors and the values they are built from.
mod client;
mod manager;
mod mode;
mod monitor;
mod size_hints;
mod tag;
mod window_change;
mod window_info;
mod window_type;
mod xyhw;

pub mod dto;

pub use client::{Client, Handle, WindowHandle, BROKEN};
#[cfg(test)]
pub(crate) use client::MockHandle;
pub use manager::Manager;
#[cfg(test)]
pub(crate) use manager::TestManager;
pub use mode::Mode;
pub use monitor::{Monitor, MonitorDefaults, MonitorId};
pub use size_hints::{NormalHints, SizeHints};
pub use tag::{TagId, TagSet, Tags, MAX_TAGS};
pub use window_change::{ClientRequest, StackMode, StateAction, WindowChange, WindowChanges};
pub use window_info::{WindowInfo, WmHints};
#[cfg(test)]
pub(crate) use window_info::test_window;
pub use window_type::WindowType;
pub use xyhw::Xyhw;
