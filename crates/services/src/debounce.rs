//! Trailing-edge debounce: only the last call in a burst runs, once the
//! burst has been quiet for `wait`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Proof of one `Debouncer::call`; only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    pub wait: Duration,
}

/// Timer-agnostic debounce state.
///
/// The caller sleeps for `ticket.wait` with whatever timer it has and then
/// hands the ticket back to `fire`.
#[derive(Debug)]
pub struct Debouncer<A> {
    wait: Duration,
    generation: u64,
    pending: Option<A>,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending arguments; earlier tickets become stale.
    pub fn call(&mut self, args: A) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(args);
        DebounceTicket {
            generation: self.generation,
            wait: self.wait,
        }
    }

    /// Arguments to run with, if `ticket` is still the latest call.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<A> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A function wrapped in a debouncer, driven by the Tokio timer.
pub struct DebouncedFn<A> {
    state: Arc<Mutex<Debouncer<A>>>,
    func: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Clone for DebouncedFn<A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            func: Arc::clone(&self.func),
        }
    }
}

impl<A: Send + 'static> DebouncedFn<A> {
    pub fn new(wait: Duration, func: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(Debouncer::new(wait))),
            func: Arc::new(func),
        }
    }

    /// Schedule `func(args)`, cancelling whatever call is still waiting.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, args: A) {
        let ticket = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .call(args);
        let state = Arc::clone(&self.state);
        let func = Arc::clone(&self.func);
        tokio::spawn(async move {
            tokio::time::sleep(ticket.wait).await;
            let ready = state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .fire(ticket);
            if let Some(args) = ready {
                func(args);
            }
        });
    }

    pub fn cancel(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }
}
