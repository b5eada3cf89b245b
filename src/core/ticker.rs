//! Host-side fixed-interval scheduler driving the refresher.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs a callback on a background thread: once right away, then once per
/// period, until the callback breaks, `cancel` is called, or the task is
/// dropped. Ticks never overlap.
pub struct RepeatingTask {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl RepeatingTask {
    pub fn spawn<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut count = 0u64;
            loop {
                count += 1;
                if tick(count).is_break() {
                    break;
                }
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // explicit stop, or the task handle went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            tracing::debug!(event = "ticker.stopped", ticks = count);
            count
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread. Returns the number of ticks run.
    pub fn cancel(mut self) -> u64 {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.wait()
    }

    /// Wait until the callback breaks on its own. Returns the number of ticks.
    pub fn join(mut self) -> u64 {
        self.wait()
    }

    fn wait(&mut self) -> u64 {
        match self.handle.take() {
            Some(h) => h.join().unwrap_or_else(|_| {
                tracing::error!(event = "ticker.tick_panicked");
                0
            }),
            None => 0,
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.stop_tx.take();
        self.wait();
    }
}
