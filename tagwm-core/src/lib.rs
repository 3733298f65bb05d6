//! Core of the tagwm tiling window manager: clients, monitors, tags,
//! layouts and the handlers that keep them in sync with the display server.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
pub mod display_action;
pub mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod solver;
pub mod state;
pub mod utils;

pub use utils::modmask_lookup::Button;
pub use utils::modmask_lookup::ModMask;

pub use command::Command;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use handlers::display_event_handler::{Dispatcher, EventHandler};
pub use models::Manager;
pub use models::Mode;
pub use state::State;
pub use utils::child_process;
