//! src/net/poller.rs
//!
//! Fixed-period poll timer. Each due tick hands one fetch to a worker thread;
//! outcomes come back over a channel and are drained by the UI loop, so the
//! sample buffer is only ever touched from that loop.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use super::reading::Reading;
use super::source::{FetchError, SampleSource};

pub type FetchOutcome = Result<Reading, FetchError>;

pub struct Poller {
    source: Arc<dyn SampleSource>,
    interval: Duration,
    /// The single armed deadline; `None` when stopped.
    next_due: Option<Instant>,
    in_flight: bool,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl Poller {
    pub fn new(source: Arc<dyn SampleSource>, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            interval,
            next_due: None,
            in_flight: false,
            tx,
            rx,
        }
    }

    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[cfg(test)]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn source(&self) -> &dyn SampleSource {
        self.source.as_ref()
    }

    /// Arm the timer with the first fetch due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Replace the armed timer with one at `interval`, first firing one period
    /// from `now`. A fetch already in flight still delivers its outcome.
    pub fn restart(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// Fire the timer if due. Returns `true` when a fetch was dispatched.
    ///
    /// The deadline advances by one period per firing; if the loop fell more
    /// than a period behind it re-anchors on `now` instead of bursting.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);

        if self.in_flight {
            debug!("poll tick skipped, previous request still in flight");
            return false;
        }
        self.dispatch();
        true
    }

    fn dispatch(&mut self) {
        self.in_flight = true;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            // a panicking source still has to clear the in-flight flag
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| source.fetch()))
                .unwrap_or_else(|payload| Err(FetchError::Panicked(panic_message(payload))));
            // receiver gone means the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Completed fetch, if one is waiting.
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.in_flight = false;
        Some(outcome)
    }

    #[cfg(test)]
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<FetchOutcome> {
        let outcome = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = false;
        Some(outcome)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::net::reading::Quality;

    /// Source that replays canned outcomes; `None` entries become transport errors.
    pub struct ScriptedSource {
        script: Mutex<VecDeque<Option<Reading>>>,
    }

    impl ScriptedSource {
        pub fn new(script: Vec<Option<Reading>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
            }
        }
    }

    pub fn reading(x: f64, y: f64, h: f64) -> Reading {
        Reading {
            flow_x: x,
            flow_y: y,
            height: h,
            quality: Quality::Number(200.0),
        }
    }

    impl SampleSource for ScriptedSource {
        fn fetch(&self) -> Result<Reading, FetchError> {
            match self.script.lock().unwrap().pop_front().flatten() {
                Some(r) => Ok(r),
                None => Err(FetchError::Transport {
                    url: "scripted".into(),
                    reason: "connection refused".into(),
                }),
            }
        }

        fn describe(&self) -> String {
            "scripted".into()
        }
    }
}
