//! Process lifecycle: one `Running -> Draining -> Stopped` walk, never back.
//!
//! Shutdown is triggered by a termination signal or by a fatal fault, and
//! always runs the same ordered cleanup: stop accepting connections, close
//! the identity-provider handle, clear the token cache, wait for in-flight
//! requests. The whole drain is bounded by a fixed grace period; the exit
//! code says whether cleanup finished (0) or failed/timed out (1).
//!
//! Background tasks report their failures over an explicit channel instead
//! of dying on a log line: non-fatal outcomes are counted and logged here,
//! fatal ones begin the drain.

use std::future::Future;

use thiserror::Error;
use tokio::signal;
use tokio::sync::{mpsc, watch};
use tokio::time::{timeout, Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Draining,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownCause {
    Signal,
    Fault,
}

#[derive(Debug)]
pub struct BackgroundFault {
    pub task: &'static str,
    pub error: String,
    pub fatal: bool,
}

/// Cheap handle background tasks use to surface their outcome.
#[derive(Clone)]
pub struct FaultReporter {
    tx: mpsc::UnboundedSender<BackgroundFault>,
}

impl FaultReporter {
    /// A failure that is not tied to a single request and should not bring
    /// the process down.
    pub fn report(&self, task: &'static str, error: String) {
        let _ = self.tx.send(BackgroundFault {
            task,
            error,
            fatal: false,
        });
    }

    /// An unrecoverable failure; the lifecycle begins draining.
    pub fn report_fatal(&self, task: &'static str, error: String) {
        let _ = self.tx.send(BackgroundFault {
            task,
            error,
            fatal: true,
        });
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DrainError {
    #[error("server task failed: {0}")]
    Server(String),
}

pub struct Lifecycle {
    state_tx: watch::Sender<LifecycleState>,
    fault_rx: mpsc::UnboundedReceiver<BackgroundFault>,
    reporter: FaultReporter,
    background_failures: u64,
}

impl Lifecycle {
    /// Construct only once the listener is bound: the initial state is
    /// `Running`.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(LifecycleState::Running);
        Self {
            state_tx,
            fault_rx: rx,
            reporter: FaultReporter { tx },
            background_failures: 0,
        }
    }

    pub fn reporter(&self) -> FaultReporter {
        self.reporter.clone()
    }

    pub fn state(&self) -> LifecycleState {
        *self.state_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state_tx.subscribe()
    }

    /// Non-fatal background failures observed so far.
    pub fn background_failures(&self) -> u64 {
        self.background_failures
    }

    fn transition(&self, next: LifecycleState) {
        let current = self.state();
        if current == next {
            return;
        }
        log::info!("lifecycle: {:?} -> {:?}", current, next);
        let _ = self.state_tx.send(next);
    }

    /// Resolves when shutdown should begin: `shutdown` (the external
    /// termination signal) completes, or a fatal fault arrives. Non-fatal
    /// faults are counted and logged, never escalated.
    pub async fn wait_for_trigger<F>(&mut self, shutdown: F) -> ShutdownCause
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => return ShutdownCause::Signal,
                fault = self.fault_rx.recv() => match fault {
                    Some(fault) if fault.fatal => {
                        log::error!("fatal fault in {}: {}", fault.task, fault.error);
                        return ShutdownCause::Fault;
                    }
                    Some(fault) => {
                        self.background_failures += 1;
                        log::warn!("background task {} failed: {}", fault.task, fault.error);
                    }
                    // Every reporter dropped; only the signal remains.
                    None => {
                        (&mut shutdown).await;
                        return ShutdownCause::Signal;
                    }
                },
            }
        }
    }

    /// Runs the ordered cleanup under the grace period and returns the
    /// process exit code.
    pub async fn drain<F>(&self, cleanup: F, grace: Duration) -> i32
    where
        F: Future<Output = Result<(), DrainError>>,
    {
        self.transition(LifecycleState::Draining);

        let code = match timeout(grace, cleanup).await {
            Ok(Ok(())) => 0,
            Ok(Err(e)) => {
                log::error!("cleanup failed: {}", e);
                1
            }
            Err(_) => {
                log::error!(
                    "grace period of {:?} elapsed with cleanup still pending",
                    grace
                );
                1
            }
        };

        self.transition(LifecycleState::Stopped);
        code
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes on SIGTERM or Ctrl+C.
pub async fn termination_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("termination signal received");
}
