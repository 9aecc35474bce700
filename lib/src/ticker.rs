//! Fixed-interval tick source driving per-period recomputation.

use jiff::Timestamp;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Publishes the current instant on a channel at a fixed period.
///
/// This replaces UI-lifecycle timers with explicit message passing:
/// start on subscribe, stop (or drop) on unsubscribe. Each tick
/// carries a fresh wall-clock `now` for the consumer to evaluate
/// items against. Teardown is deterministic: stopping wakes the
/// worker immediately rather than letting it sleep out a period, and
/// dropping the receiver also ends it.
#[derive(Debug)]
pub struct Ticker {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts a tick thread; instants arrive on the returned receiver
    /// once per `period`.
    pub fn start(period: Duration) -> (Self, Receiver<Timestamp>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match shutdown_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(Timestamp::now()).is_err() {
                            // subscriber went away
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        (
            Self {
                shutdown: Some(shutdown_tx),
                handle: Some(handle),
            },
            tick_rx,
        )
    }

    /// Stops the tick thread and waits for it to exit.
    pub fn stop(mut self) {
        self.shutdown_now();
    }

    fn shutdown_now(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_non_decreasing() {
        let (ticker, ticks) = Ticker::start(Duration::from_millis(5));
        let first = ticks.recv().unwrap();
        let second = ticks.recv().unwrap();
        let third = ticks.recv().unwrap();
        assert!(first <= second && second <= third);
        ticker.stop();
    }

    #[test]
    fn stop_disconnects_the_channel() {
        let (ticker, ticks) = Ticker::start(Duration::from_millis(5));
        let _ = ticks.recv().unwrap();
        ticker.stop();
        // the worker is already gone; the channel drains and closes
        while ticks.recv().is_ok() {}
        assert!(ticks.recv().is_err());
    }

    #[test]
    fn dropping_the_receiver_ends_the_worker() {
        let (ticker, ticks) = Ticker::start(Duration::from_millis(5));
        drop(ticks);
        // stop() joins the thread; it must have noticed the closed
        // channel instead of spinning forever
        ticker.stop();
    }
}
