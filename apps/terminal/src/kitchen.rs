//! # Kitchen Simulator
//!
//! Runs the order preparation next to the checkout flow.
//!
//! ## Status Handoff
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Preparation Lifecycle                              │
//! │                                                                         │
//! │  checkout flow                         kitchen task                     │
//! │  ─────────────                         ────────────                     │
//! │  dispatch(Pending)                                                      │
//! │    └─ Pending → Preparing ──spawn────► sleep(prep_delay)                │
//! │  "Estado: En Preparación"                   │                           │
//! │  compute totals                             │                           │
//! │  handle.wait().await ◄────oneshot───── Preparing → Ready                │
//! │  "Estado final: Listo"                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The task is the only writer and the flow the only reader of the final
//! status; the oneshot channel carries exactly one value.

use std::time::Duration;

use foodexpress_core::OrderStatus;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Spawns preparation tasks with a fixed simulated delay.
#[derive(Debug, Clone, Copy)]
pub struct Kitchen {
    prep_delay: Duration,
}

impl Kitchen {
    pub fn new(prep_delay: Duration) -> Self {
        Kitchen { prep_delay }
    }

    /// Starts preparing an order.
    ///
    /// The status moves to Preparing before this returns; the returned handle
    /// resolves to Ready once the delay has elapsed. Must be called inside a
    /// tokio runtime.
    pub fn dispatch(&self, status: OrderStatus) -> AppResult<PreparationHandle> {
        let preparing = status.transition(OrderStatus::Preparing)?;
        let (tx, rx) = oneshot::channel();

        let delay = self.prep_delay;
        let current = preparing.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let finished = current
                .transition(OrderStatus::Ready)
                .unwrap_or_else(|err| OrderStatus::Error(err.to_string()));
            debug!(status = %finished, "Preparation finished");

            if tx.send(finished).is_err() {
                warn!("Order status dropped: nobody is waiting for the kitchen");
            }
        });

        Ok(PreparationHandle {
            status: preparing,
            rx,
            task,
        })
    }
}

/// An order being prepared.
#[derive(Debug)]
pub struct PreparationHandle {
    status: OrderStatus,
    rx: oneshot::Receiver<OrderStatus>,
    task: JoinHandle<()>,
}

impl PreparationHandle {
    /// Status at dispatch time (Preparing).
    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Waits for the kitchen to finish. No timeout, no cancellation.
    pub async fn wait(self) -> AppResult<OrderStatus> {
        let status = self.rx.await.map_err(|_| {
            AppError::Kitchen("preparation ended without reporting a status".to_string())
        })?;

        self.task
            .await
            .map_err(|err| AppError::Kitchen(err.to_string()))?;

        Ok(status)
    }
}
