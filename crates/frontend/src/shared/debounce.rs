//! Trailing-edge debounce for inputs.
//!
//! Each keystroke issues a ticket and sleeps; only the sleeper holding the
//! newest ticket runs its action, so a burst of input fires once with the
//! last value.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }

    /// What a sleeper does on wake-up: runs `action` only while `ticket` is
    /// still the newest. Returns whether it ran.
    pub fn settle(&self, ticket: u64, action: impl FnOnce()) -> bool {
        let current = self.is_current(ticket);
        if current {
            action();
        }
        current
    }
}

#[derive(Clone, Copy)]
pub struct DebounceGate {
    counter: StoredValue<TicketCounter>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self {
            counter: StoredValue::new(TicketCounter::default()),
        }
    }

    pub fn issue(&self) -> u64 {
        self.counter
            .try_update_value(|c| c.issue())
            .unwrap_or_default()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter
            .try_with_value(|c| c.is_current(ticket))
            .unwrap_or(false)
    }

    pub fn settle(&self, ticket: u64, action: impl FnOnce()) -> bool {
        let counter = self.counter.try_get_value().unwrap_or_default();
        counter.settle(ticket, action)
    }

    /// Drops whatever is pending.
    pub fn cancel(&self) {
        self.issue();
    }

    /// Runs `action` after `delay_ms` unless `run` or `cancel` is called
    /// again in the meantime.
    pub fn run(&self, delay_ms: u32, action: impl FnOnce() + 'static) {
        let ticket = self.issue();
        let gate = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            gate.settle(ticket, action);
        });
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn test_burst_of_input_fires_once_with_last_value() {
        let mut counter = TicketCounter::default();
        let mut requests: Vec<&str> = Vec::new();

        let first = counter.issue();
        let second = counter.issue();

        assert!(!counter.settle(first, || requests.push("sol")));
        assert!(counter.settle(second, || requests.push("solar")));
        assert_eq!(requests, vec!["solar"]);
    }

    #[test]
    fn test_gate_cancel_drops_pending_action() {
        let owner = Owner::new();
        owner.set();

        let gate = DebounceGate::new();
        let mut fired = 0;

        let pending = gate.issue();
        gate.cancel();
        assert!(!gate.settle(pending, || fired += 1));

        let latest = gate.issue();
        assert!(gate.settle(latest, || fired += 1));
        assert_eq!(fired, 1);
    }
}
