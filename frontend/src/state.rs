use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::{Reservation, Review, Slot};

/// How the delegated click listeners on the slot and reservation lists
/// behave between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerPolicy {
    /// Only the first book/cancel click after each render is handled; later
    /// clicks are ignored until the list renders again.
    #[default]
    SingleUse,
    /// Every click is handled.
    Persistent,
}

/// Arms a list's click handling after a render and disarms it according to
/// the active [`ListenerPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickGate {
    armed: bool,
}

impl ClickGate {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Returns whether this click should be handled.
    pub fn take(&mut self, policy: ListenerPolicy) -> bool {
        if !self.armed {
            return false;
        }
        if policy == ListenerPolicy::SingleUse {
            self.armed = false;
        }
        true
    }
}

/// View data for the current page session. Nothing here outlives the page.
#[derive(Debug, Default)]
pub struct AppState {
    pub listener_policy: ListenerPolicy,

    pub slots: Vec<Slot>,
    pub slot_clicks: ClickGate,

    pub reviews: Vec<Review>,

    pub my_reservations: Vec<Reservation>,
    pub cancel_clicks: ClickGate,

    pub all_slots: Vec<Slot>,
    pub report_text: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(listener_policy: ListenerPolicy) -> Self {
        Self { listener_policy, ..Self::default() }
    }

    /// Run the reducer for one message and return the side effects to execute.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        crate::update::update(self, msg)
    }
}

// Store global application state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Dispatch a message against the global state and execute the resulting
/// commands. The state borrow is released before any command runs, so
/// executors may dispatch again.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));
    crate::command_executors::execute_commands(commands);
}

pub fn set_listener_policy(policy: ListenerPolicy) {
    APP_STATE.with(|state| state.borrow_mut().listener_policy = policy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_use_gate_handles_one_click_per_arm() {
        let mut gate = ClickGate::default();
        assert!(!gate.take(ListenerPolicy::SingleUse), "nothing rendered yet");
        gate.arm();
        assert!(gate.take(ListenerPolicy::SingleUse));
        assert!(!gate.take(ListenerPolicy::SingleUse));
        gate.arm();
        assert!(gate.take(ListenerPolicy::SingleUse));
    }

    #[test]
    fn persistent_gate_stays_armed() {
        let mut gate = ClickGate::default();
        gate.arm();
        assert!(gate.take(ListenerPolicy::Persistent));
        assert!(gate.take(ListenerPolicy::Persistent));
        assert!(gate.take(ListenerPolicy::Persistent));
    }
}
