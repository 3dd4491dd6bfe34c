//! # Debounce
//!
//! A replace-on-submit scheduled task for free-text search input.
//!
//! The contract is exactly "at most one pending recomputation; newest input
//! wins": every submission replaces whatever was pending and re-arms the
//! deadline, so only the last keystroke inside the window triggers
//! filtering and suggestion work.
//!
//! There is no timer here. The caller supplies `Instant` values for both
//! submission and polling, which keeps this crate free of I/O and makes the
//! debounce fully testable with synthetic clocks.
//!
//! ## Usage
//! ```rust
//! use std::time::{Duration, Instant};
//! use pecaaq_core::Debounce;
//!
//! let mut debounce: Debounce<String> = Debounce::new(Duration::from_millis(220));
//! let t0 = Instant::now();
//!
//! debounce.submit("fil".to_string(), t0);
//! debounce.submit("filtro".to_string(), t0 + Duration::from_millis(100));
//!
//! // 220ms after the FIRST keystroke: the re-armed deadline hasn't passed
//! assert_eq!(debounce.fire(t0 + Duration::from_millis(220)), None);
//!
//! // 220ms after the LAST keystroke: only the newest value fires
//! let fired = debounce.fire(t0 + Duration::from_millis(320));
//! assert_eq!(fired.as_deref(), Some("filtro"));
//! ```

use std::time::{Duration, Instant};

use crate::SEARCH_DEBOUNCE_MS;

/// A single-slot debouncer: holds at most one pending value and the
/// deadline at which it becomes due.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    /// Creates a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Debounce {
            delay,
            pending: None,
        }
    }

    /// A debouncer with the storefront's search delay.
    pub fn search() -> Self {
        Debounce::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    /// Schedules `value`, replacing any pending value and re-arming the
    /// deadline to `now + delay`. Newest input wins.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Takes the pending value if its deadline has passed; otherwise
    /// leaves it in place and returns `None`.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Drops the pending value without firing it. Used when another input
    /// (e.g. picking a suggestion) supersedes the typed query.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The deadline of the pending value, if any. The shell uses this to
    /// know how long to wait before polling [`fire`](Self::fire).
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}
