//! Debounced event forwarding
//!
//! Buffers a burst of values and fires the callback only for the last value
//! of a quiet window. Each submit bumps a sequence counter and sleeps for the
//! window; on wake it fires only if no newer submit has arrived. Superseded
//! values are never forwarded, and the final value always is once input
//! stops.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Debounces values of type `T` into a fire callback
pub struct Debouncer<T> {
    window: Duration,
    seq: Arc<AtomicU64>,
    on_fire: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given quiet window.
    ///
    /// `on_fire` runs on a tokio worker after the window elapses without a
    /// newer submit.
    pub fn new(window: Duration, on_fire: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            window,
            seq: Arc::new(AtomicU64::new(0)),
            on_fire: Arc::new(on_fire),
        }
    }

    /// Submit a value, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, value: T) {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let seq = self.seq.clone();
        let on_fire = self.on_fire.clone();
        let window = self.window;

        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if seq.load(Ordering::SeqCst) == ticket {
                on_fire(value);
            }
        });
    }
}
