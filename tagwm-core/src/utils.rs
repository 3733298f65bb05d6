//! Various shared functions.
pub mod child_process;
pub mod helpers;
pub mod modmask_lookup;
pub mod window_updater;
