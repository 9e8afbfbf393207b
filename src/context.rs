//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::liveness::Liveness;
use crate::shell::Shell;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Action cache and the operations that change it
    pub shell: Shell,
    /// Shared server status, fed by the single liveness poller
    pub liveness: ReadSignal<Liveness>,
    /// Trigger to reload the action list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the action list - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        shell: Shell,
        liveness: ReadSignal<Liveness>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            shell,
            liveness,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Fetch the action list again
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
