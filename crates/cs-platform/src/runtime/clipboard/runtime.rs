//! A minimal, cross-platform clipboard runtime.
//!
//! This runtime owns the start/stop lifecycle of the clipboard watcher and
//! drives it from a background tokio task. Polling is the only strategy;
//! an event-driven runtime could replace it behind `WatcherControlPort`.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::{
    sync::{oneshot, Mutex},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use cs_core::ports::{SystemClipboardPort, WatcherControlError, WatcherControlPort};

use super::ClipboardWatcher;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

struct PollTask {
    handle: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

pub struct PollingClipboardRuntime<C>
where
    C: SystemClipboardPort + ?Sized,
{
    watcher: Arc<ClipboardWatcher<C>>,
    poll_interval: Duration,
    running: AtomicBool,
    task: Mutex<Option<PollTask>>,
}

impl<C> PollingClipboardRuntime<C>
where
    C: SystemClipboardPort + ?Sized,
{
    pub fn new(watcher: Arc<ClipboardWatcher<C>>) -> Self {
        Self::with_interval(watcher, DEFAULT_POLL_INTERVAL)
    }

    /// A zero interval falls back to [`DEFAULT_POLL_INTERVAL`].
    pub fn with_interval(watcher: Arc<ClipboardWatcher<C>>, poll_interval: Duration) -> Self {
        let poll_interval = if poll_interval.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            poll_interval
        };
        Self {
            watcher,
            poll_interval,
            running: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[async_trait]
impl<C> WatcherControlPort for PollingClipboardRuntime<C>
where
    C: SystemClipboardPort + ?Sized + 'static,
{
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        // Hold the task slot across the flag flip so a concurrent stop
        // cannot observe `running` without a task to shut down.
        let mut slot = self.task.lock().await;
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("clipboard watcher already running");
            return Ok(());
        }

        let watcher = self.watcher.clone();
        let period = self.poll_interval;
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                // Shutdown is only observed between checks.
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {}
                }

                if let Err(err) = watcher.check_once().await {
                    log::warn!("clipboard check failed: {:?}", err);
                }
            }
            log::debug!("clipboard poll task exited");
        });

        *slot = Some(PollTask { handle, shutdown });
        log::info!("clipboard watcher started, polling every {:?}", period);

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        let mut slot = self.task.lock().await;
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(task) = slot.take() {
            // The receiver is gone only if the task already exited.
            let _ = task.shutdown.send(());
            if let Err(err) = task.handle.await {
                log::warn!("clipboard poll task ended abnormally: {:?}", err);
            }
        }
        log::info!("clipboard watcher stopped");

        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
