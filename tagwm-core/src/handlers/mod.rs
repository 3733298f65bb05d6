pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod goto_tag_handler;
mod minimize_handler;
mod mouse_combo_handler;
mod screen_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

pub use display_event_handler::Dispatcher;

use super::command::Command;
use super::config::Config;
use super::display_action::DisplayAction;
use super::display_event::{DisplayEvent, Target};
use super::models::{Handle, Manager, Mode, MonitorId, WindowHandle, Xyhw};
use super::state::State;
