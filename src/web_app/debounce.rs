// web_app/debounce.rs - Debounced values
//
// A `Debouncer` only releases the most recent value pushed into it. Each push
// restarts the quiet period by invalidating the ticket of the previous one;
// the timer that fires for an outdated ticket gets nothing back.
//
// The timers themselves belong to the caller: the browser hook below uses
// `set_timeout`, tests drive it with tokio's paused clock.

use std::time::Duration;

/// Quiet period before a search term is forwarded
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Handle returned by [`Debouncer::push`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value; any earlier pending value is discarded
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the timer for `ticket` elapses
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value so no outstanding timer can deliver it
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DELAY)
    }
}

/// Settled copy of `source` that updates once it has been stable for `delay`
///
/// Pending timeouts are cleared when the owning component is dropped.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn use_debounced(source: leptos::prelude::RwSignal<String>, delay: Duration) -> leptos::prelude::ReadSignal<String> {
    use leptos::prelude::*;
    use std::sync::{Arc, Mutex};

    let (settled, set_settled) = signal(source.get_untracked());
    let debouncer = Arc::new(Mutex::new(Debouncer::<String>::new(delay)));
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let on_change = Arc::clone(&debouncer);
    Effect::new(move |_| {
        let value = source.get();
        let ticket = match on_change.lock() {
            Ok(mut d) => d.push(value),
            Err(_) => return,
        };
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        let on_fire = Arc::clone(&on_change);
        let handle = set_timeout_with_handle(
            move || {
                let ready = on_fire.lock().ok().and_then(|mut d| d.fire(ticket));
                if let Some(value) = ready {
                    set_settled.set(value);
                }
            },
            delay,
        )
        .ok();
        timer.set_value(handle);
    });

    on_cleanup(move || {
        if let Ok(mut d) = debouncer.lock() {
            d.cancel();
        }
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    settled
}
