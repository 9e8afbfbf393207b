//! Server Liveness
//!
//! One poller for the whole app. It pings the server root on a fixed interval and
//! publishes the result through a signal that any component can subscribe to.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::{ActionsApi, ApiError, HttpActionsApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Checking,
    Up,
    Down,
}

impl Liveness {
    pub fn from_ping(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Liveness::Up,
            Err(_) => Liveness::Down,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Liveness::Checking => "Checking server...",
            Liveness::Up => "Server is running",
            Liveness::Down => "Server is down",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Liveness::Checking => "server-status checking",
            Liveness::Up => "server-status up",
            Liveness::Down => "server-status down",
        }
    }
}

/// Keeps at most one check in flight; ticks that arrive meanwhile are dropped.
#[derive(Debug, Default)]
pub struct CheckGate {
    pending: Cell<bool>,
}

/// Held for the duration of one check. Dropping it reopens the gate.
#[derive(Debug)]
pub struct CheckTicket {
    gate: Rc<CheckGate>,
}

impl CheckGate {
    /// `None` while another ticket is alive
    pub fn try_begin(gate: &Rc<Self>) -> Option<CheckTicket> {
        if gate.pending.replace(true) {
            return None;
        }
        Some(CheckTicket { gate: Rc::clone(gate) })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

impl Drop for CheckTicket {
    fn drop(&mut self) {
        self.gate.pending.set(false);
    }
}

/// Ping once if no other check is running. The gate reopens however the future ends,
/// including when it is dropped unfinished.
pub fn start_check<A: ActionsApi>(api: A, gate: &Rc<CheckGate>) -> Option<impl Future<Output = Liveness>> {
    let ticket = CheckGate::try_begin(gate)?;
    Some(async move {
        let result = api.ping().await;
        drop(ticket);
        Liveness::from_ping(&result)
    })
}

/// Owns a timer until cancelled; cancelling drops it.
#[derive(Debug)]
pub struct TimerSlot<T> {
    timer: RefCell<Option<T>>,
}

impl<T> TimerSlot<T> {
    pub fn new(timer: T) -> Self {
        Self { timer: RefCell::new(Some(timer)) }
    }

    /// False if the timer was already gone
    pub fn cancel(&self) -> bool {
        self.timer.borrow_mut().take().is_some()
    }
}

/// Keep `timer` alive until the current owner is cleaned up
pub fn hold_until_cleanup<T: 'static>(timer: T) {
    let slot = StoredValue::<TimerSlot<T>, LocalStorage>::new_local(TimerSlot::new(timer));
    on_cleanup(move || {
        slot.try_with_value(TimerSlot::cancel);
    });
}

/// Start polling and return the shared status.
///
/// Must be called once, under the root owner; the interval is cancelled when that owner is disposed.
pub fn provide_liveness(api: HttpActionsApi, every: Duration) -> ReadSignal<Liveness> {
    let status = RwSignal::new(Liveness::Checking);
    let gate = Rc::new(CheckGate::default());

    let tick = move || {
        let Some(check) = start_check(api.clone(), &gate) else {
            log::debug!("Liveness check still running, skipping tick");
            return;
        };
        spawn_local(async move {
            let next = check.await;
            if status.try_get_untracked() != Some(next) {
                log::info!("Server liveness: {:?}", next);
            }
            let _ = status.try_set(next);
        });
    };

    tick();
    let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
    hold_until_cleanup(Interval::new(millis, tick));

    status.read_only()
}
