use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::handlers::Dispatcher;
use crate::models::Handle;
use crate::state::State;
use crate::utils::child_process::Children;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
pub struct Manager<H: Handle, C, SERVER: DisplayServer<H>> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) reload_requested: bool,
    pub(crate) handlers: Dispatcher<H, C, SERVER>,
}

impl<H: Handle, C, SERVER> Manager<H, C, SERVER>
where
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connects to the display server and builds the initial state.
    ///
    /// # Errors
    ///
    /// Fails when the display server cannot be opened or another window
    /// manager already owns it.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        Ok(Self::with_display_server(config, display_server))
    }

    pub(crate) fn with_display_server(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(&config),
            config,
            display_server,
            children: Children::default(),
            reap_requested: Arc::default(),
            reload_requested: false,
            handlers: Dispatcher::new(),
        }
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Re-read the configuration before the next event batch.
    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }
}

#[cfg(test)]
pub(crate) type TestManager = Manager<
    crate::models::MockHandle,
    crate::config::tests::TestConfig,
    crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
>;

#[cfg(test)]
impl TestManager {
    /// A manager with one 1920x1080 monitor and the given tags.
    pub fn new_test(tags: Vec<String>) -> Self {
        Self::new_test_with_config(crate::config::tests::TestConfig {
            tags,
            ..Default::default()
        })
    }

    pub fn new_test_with_config(config: crate::config::tests::TestConfig) -> Self {
        let server = crate::display_servers::MockDisplayServer::new(&config)
            .expect("the mock display server always connects");
        let mut manager = Self::with_display_server(config, server);
        let topology = manager.display_server.topology();
        manager.state.update_geometry(&topology, (0, 0));
        manager
    }
}
