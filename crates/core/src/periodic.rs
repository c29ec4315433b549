// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timed and periodic execution of callables
//!
//! A [`TimedCall`] invokes a callable at wake times pulled lazily from an
//! iterator of [`Instant`]s. A [`PeriodicCall`] is a [`TimedCall`] whose
//! wake times are derived from a fixed interval.
//!
//! Both run on the tokio runtime: the pending wake-up is a task sleeping
//! until the next wake time, and each firing spawns the callable as its own
//! task so scheduling never waits on a slow invocation.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Errors from misuse of the [`TimedCall`] state machine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimedCallError {
    #[error("timed call is already running")]
    AlreadyRunning,
    #[error("timed call is not running")]
    NotRunning,
}

/// Produces one boxed invocation future per firing.
type CallFactory = Box<dyn FnMut() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Shared scheduling state, mutated only under the lock
struct Shared {
    running: bool,
    /// Task sleeping until the next wake time
    timer: Option<JoinHandle<()>>,
    /// The currently-executing invocation, if any
    in_flight: Option<JoinHandle<()>>,
}

/// Call a function at caller-specified times.
///
/// The callable is invoked at each wake time pulled from the iterator passed
/// to [`start`](Self::start), until [`stop`](Self::stop) is called or the
/// iterator is exhausted. Wake times already in the past are skipped without
/// firing.
pub struct TimedCall {
    func: Arc<Mutex<CallFactory>>,
    shared: Arc<Mutex<Shared>>,
}

impl TimedCall {
    /// Create a timed call around a synchronous function.
    pub fn new<F>(mut func: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::from_factory(Box::new(move || {
            func();
            Box::pin(std::future::ready(()))
        }))
    }

    /// Create a timed call around a future-producing function.
    ///
    /// Each firing spawns the produced future as its own task;
    /// [`stop`](Self::stop) waits for the in-flight one to finish.
    pub fn new_async<F, Fut>(mut func: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::from_factory(Box::new(move || Box::pin(func())))
    }

    fn from_factory(factory: CallFactory) -> Self {
        Self {
            func: Arc::new(Mutex::new(factory)),
            shared: Arc::new(Mutex::new(Shared {
                running: false,
                timer: None,
                in_flight: None,
            })),
        }
    }

    /// Whether the call is currently running.
    pub fn running(&self) -> bool {
        self.shared.lock().unwrap_or_else(|e| e.into_inner()).running
    }

    /// Start calling the function at the specified times.
    ///
    /// `times` yields absolute wake times and may be infinite; it is
    /// consumed lazily. Values earlier than the current time are skipped.
    /// If the iterator exhausts, the call stops on its own.
    pub fn start<I>(&self, times: I) -> Result<(), TimedCallError>
    where
        I: IntoIterator<Item = Instant>,
        I::IntoIter: Send + 'static,
    {
        let mut shared = self.shared.lock().unwrap_or_else(|e| e.into_inner());
        if shared.running {
            return Err(TimedCallError::AlreadyRunning);
        }
        shared.running = true;

        let timer = tokio::spawn(run_schedule(
            Arc::clone(&self.func),
            Arc::clone(&self.shared),
            times.into_iter(),
        ));
        shared.timer = Some(timer);
        Ok(())
    }

    /// Stop calling the function.
    ///
    /// Cancels the pending wake-up and waits for an in-flight invocation to
    /// finish before returning. The running flag is cleared before the first
    /// await, so a concurrent `stop` observes [`TimedCallError::NotRunning`].
    pub async fn stop(&self) -> Result<(), TimedCallError> {
        let (timer, in_flight) = {
            let mut shared = self.shared.lock().unwrap_or_else(|e| e.into_inner());
            if !shared.running {
                return Err(TimedCallError::NotRunning);
            }
            shared.running = false;
            (shared.timer.take(), shared.in_flight.take())
        };

        if let Some(timer) = timer {
            timer.abort();
        }
        if let Some(task) = in_flight {
            if let Err(err) = task.await {
                if err.is_panic() {
                    tracing::warn!(error = %err, "timed call invocation panicked");
                }
            }
        }
        Ok(())
    }
}

impl Drop for TimedCall {
    fn drop(&mut self) {
        let mut shared = self.shared.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(timer) = shared.timer.take() {
            timer.abort();
        }
    }
}

/// The scheduling loop behind a running [`TimedCall`].
///
/// Each iteration seeks the next wake time not earlier than now, spawns the
/// invocation for the previous wake-up, then sleeps. Exhaustion of the time
/// source stops the call without an error.
async fn run_schedule<I>(func: Arc<Mutex<CallFactory>>, shared: Arc<Mutex<Shared>>, mut times: I)
where
    I: Iterator<Item = Instant>,
{
    let mut do_call = false;
    loop {
        let now = Instant::now();
        let mut next = None;
        for time in times.by_ref() {
            if time >= now {
                next = Some(time);
                break;
            }
        }

        if next.is_none() {
            let mut shared = shared.lock().unwrap_or_else(|e| e.into_inner());
            shared.running = false;
            shared.timer = None;
        }

        // The invocation for the wake-up that just fired. Spawned after the
        // next wake time is computed, so a slow callable cannot delay the
        // schedule; fired even when the time source exhausted on this pull.
        if do_call {
            let invocation = (func.lock().unwrap_or_else(|e| e.into_inner()))();
            let task = tokio::spawn(invocation);
            shared.lock().unwrap_or_else(|e| e.into_inner()).in_flight = Some(task);
        }

        let Some(next) = next else {
            return;
        };
        sleep_until(next).await;
        if !shared.lock().unwrap_or_else(|e| e.into_inner()).running {
            // stop() raced the wake-up; the firing is a no-op
            return;
        }
        do_call = true;
    }
}

/// A [`TimedCall`] fired at fixed time intervals.
pub struct PeriodicCall {
    call: TimedCall,
}

impl PeriodicCall {
    /// Create a periodic call around a synchronous function.
    pub fn new<F>(func: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            call: TimedCall::new(func),
        }
    }

    /// Create a periodic call around a future-producing function.
    pub fn new_async<F, Fut>(func: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            call: TimedCall::new_async(func),
        }
    }

    /// Whether the call is currently running.
    pub fn running(&self) -> bool {
        self.call.running()
    }

    /// Start calling the function every `interval`.
    ///
    /// With `now` set, the first call fires at the moment `start` is
    /// invoked; otherwise the first call happens after one full interval.
    pub fn start(&self, interval: Duration, now: bool) -> Result<(), TimedCallError> {
        let first = Instant::now() + if now { Duration::ZERO } else { interval };
        let times = std::iter::successors(Some(first), move |time| Some(*time + interval));
        self.call.start(times)
    }

    /// Stop calling the function periodically.
    pub async fn stop(&self) -> Result<(), TimedCallError> {
        self.call.stop().await
    }
}

#[cfg(test)]
#[path = "periodic_tests.rs"]
mod tests;
