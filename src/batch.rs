//! Batch orchestration: fan a resolved target set out to per-device
//! session runners and collect one report.
//!
//! Devices are independent: a failure or skip on one never prevents another
//! from being attempted, and the report always enumerates every targeted
//! device in scope-resolution order, regardless of the completion order the
//! worker pool happens to achieve.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures_util::StreamExt;
use futures_util::stream;
use log::{info, warn};

use crate::error::{BatchError, Result};
use crate::inventory::Inventory;
use crate::prompter::Prompter;
use crate::runner::SessionRunner;
use crate::session::SessionFactory;
use crate::task::{BatchReport, TaskOutcome, TaskRequest};

/// Default worker pool width.
const DEFAULT_CONCURRENCY: usize = 4;

/// Cooperative cancellation signal for an in-flight batch.
///
/// Workers check the token before starting each device; a device already
/// inside its protocol runs to its disconnect step so no session leaks.
/// Cloning shares the same signal.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs one task against every device a scope resolves to.
pub struct BatchOrchestrator<F, P> {
    inventory: Inventory,
    factory: F,
    prompter: P,
    concurrency: usize,
    step_timeout: Option<Duration>,
}

impl<F: SessionFactory, P: Prompter> BatchOrchestrator<F, P> {
    /// Create an orchestrator over a read-only inventory with the given
    /// session and prompting capabilities.
    pub fn new(inventory: Inventory, factory: F, prompter: P) -> Self {
        Self {
            inventory,
            factory,
            prompter,
            concurrency: DEFAULT_CONCURRENCY,
            step_timeout: None,
        }
    }

    /// Set the worker pool width (minimum 1, default 4).
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Bound every session round-trip by a timeout.
    pub fn step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }

    /// The inventory this orchestrator targets.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run one task request to completion and produce the batch report.
    ///
    /// Resolves the request's scope first; an empty target set returns
    /// [`BatchError::NoTargets`] before any session is opened. Per-device
    /// failures and skips are ordinary report entries, never errors.
    pub async fn run(&self, request: TaskRequest, cancel: &CancelToken) -> Result<BatchReport> {
        let targets = request.scope.resolve(&self.inventory);
        if targets.is_empty() {
            warn!("no devices matched scope {:?}", request.scope);
            return Err(BatchError::NoTargets.into());
        }

        info!(
            "running '{}' against {} device(s), {} worker(s)",
            request.kind,
            targets.len(),
            self.concurrency
        );

        // Results land in a pre-sized buffer keyed by resolution position,
        // so completion order never reorders the report.
        let mut slots: Vec<Option<TaskOutcome>> = (0..targets.len()).map(|_| None).collect();

        let completed: Vec<(usize, TaskOutcome)> = stream::iter(targets.iter().enumerate())
            .map(|(position, name)| {
                let credentials = &request.credentials;
                let kind = request.kind;
                async move {
                    if cancel.is_cancelled() {
                        return (
                            position,
                            TaskOutcome::Skipped {
                                reason: "batch cancelled".to_string(),
                            },
                        );
                    }
                    // resolve() only yields inventory names
                    let Some(device) = self.inventory.get(name) else {
                        return (
                            position,
                            TaskOutcome::Failed {
                                error: format!("device '{name}' not in inventory"),
                            },
                        );
                    };
                    let runner = SessionRunner::new(name, device, kind, &self.prompter)
                        .step_timeout(self.step_timeout);
                    (position, runner.run(&self.factory, credentials).await)
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        for (position, outcome) in completed {
            slots[position] = Some(outcome);
        }

        let report = BatchReport::new(targets.into_iter().zip(slots.into_iter().map(
            |slot| match slot {
                Some(outcome) => outcome,
                None => TaskOutcome::Skipped {
                    reason: "not attempted".to_string(),
                },
            },
        )));

        info!(
            "batch finished: {} succeeded, {} skipped, {} failed",
            report.succeeded(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }
}
