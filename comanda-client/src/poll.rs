//! Polling synchronizers
//!
//! Two timer-driven tasks reconcile local view state against the order
//! store: the customer poller re-fetches exactly the orders this table
//! session has placed, the staff poller re-fetches the full queue.
//! There is no push channel; eventual consistency within one polling
//! interval is the contract.
//!
//! Each tick spawns its fetch independently, so a slow fetch never
//! blocks the timer. Results carry the tick number that produced them
//! and are discarded at apply time if a newer tick already landed,
//! which keeps an out-of-order slow response from overwriting fresher
//! state. Fetch failures are logged and retried on the next tick,
//! never surfaced to the session.
//!
//! Pollers are cancellable scheduled tasks in the worker style used
//! across this workspace: a `CancellationToken` tears the timer down
//! when the owning view goes away, and dropping the handle cancels it.

use parking_lot::Mutex;
use shared::client::Backend;
use shared::order::{Order, OrderFilter, OrderStatus};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Latest applied snapshot, tagged with the tick that produced it
struct PollCell {
    last_tick: u64,
    orders: Vec<Order>,
}

impl PollCell {
    fn new() -> Self {
        Self {
            last_tick: 0,
            orders: Vec::new(),
        }
    }

    /// Apply a fetch result unless a newer tick already landed
    ///
    /// The write is skipped when the snapshot is deep-equal to what is
    /// already held, so an unchanged poll never churns the state.
    fn apply(&mut self, tick: u64, next: Vec<Order>) -> bool {
        if tick <= self.last_tick {
            return false;
        }
        self.last_tick = tick;
        if self.orders != next {
            self.orders = next;
        }
        true
    }
}

struct CustomerPollInner {
    backend: Arc<dyn Backend>,
    order_ids: Mutex<Vec<String>>,
    cell: Mutex<PollCell>,
}

impl CustomerPollInner {
    async fn poll_once(&self, tick: u64) {
        let ids: Vec<String> = self.order_ids.lock().clone();
        if ids.is_empty() {
            return;
        }

        let mut fetched: Vec<(String, Option<Order>)> = Vec::with_capacity(ids.len());
        for id in ids {
            match self.backend.get_order(&id).await {
                Ok(Some(order)) => fetched.push((id, Some(order))),
                Ok(None) => {
                    tracing::warn!(
                        order_id = %id,
                        tick,
                        "Tracked order no longer resolves, keeping last known state"
                    );
                    fetched.push((id, None));
                }
                Err(e) => {
                    tracing::warn!(
                        order_id = %id,
                        tick,
                        error = %e,
                        "Order fetch failed, retrying on next tick"
                    );
                    fetched.push((id, None));
                }
            }
        }

        let mut cell = self.cell.lock();
        // an unresolved id falls back to the previously held snapshot
        let next: Vec<Order> = fetched
            .into_iter()
            .filter_map(|(id, result)| {
                result.or_else(|| cell.orders.iter().find(|o| o.id == id).cloned())
            })
            .collect();
        if !cell.apply(tick, next) {
            tracing::debug!(tick, "Discarded stale customer poll result");
        }
    }
}

/// Customer-side synchronizer for the current table session's orders
///
/// Owns the set of order ids this session has placed. The timer starts
/// when the first order is tracked and stops when the handle is
/// stopped or dropped (session end).
pub struct CustomerOrderPoller {
    inner: Arc<CustomerPollInner>,
    period: Duration,
    cancel: CancellationToken,
    started: AtomicBool,
}

impl CustomerOrderPoller {
    pub fn new(backend: Arc<dyn Backend>, period: Duration) -> Self {
        Self {
            inner: Arc::new(CustomerPollInner {
                backend,
                order_ids: Mutex::new(Vec::new()),
                cell: Mutex::new(PollCell::new()),
            }),
            period,
            cancel: CancellationToken::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Track a placed order; the first call starts the timer
    pub fn track(&self, order_id: impl Into<String>) {
        let id = order_id.into();
        {
            let mut ids = self.inner.order_ids.lock();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if !self.started.swap(true, Ordering::SeqCst) {
            self.spawn_timer();
        }
    }

    /// Last applied snapshots of the tracked orders
    pub fn orders(&self) -> Vec<Order> {
        self.inner.cell.lock().orders.clone()
    }

    /// Cancel the timer; pending fetch results are discarded
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    fn spawn_timer(&self) {
        let inner = Arc::clone(&self.inner);
        let cancel = self.cancel.clone();
        let period = self.period;
        tokio::spawn(async move {
            let mut tick: u64 = 0;
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("Customer order poller stopped");
                        break;
                    }
                    _ = timer.tick() => {
                        tick += 1;
                        let n = tick;
                        let inner = Arc::clone(&inner);
                        tokio::spawn(async move { inner.poll_once(n).await });
                    }
                }
            }
        });
    }
}

impl Drop for CustomerOrderPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct StaffPollInner {
    backend: Arc<dyn Backend>,
    cell: Mutex<PollCell>,
}

impl StaffPollInner {
    async fn poll_once(&self, tick: u64) {
        match self.backend.list_orders(&OrderFilter::default()).await {
            Ok(orders) => {
                if !self.cell.lock().apply(tick, orders) {
                    tracing::debug!(tick, "Discarded stale queue poll result");
                }
            }
            Err(e) => {
                tracing::warn!(tick, error = %e, "Queue fetch failed, retrying on next tick");
            }
        }
    }
}

/// Staff-side synchronizer for the full order queue
///
/// Runs from construction until stopped or dropped (view unmount).
pub struct StaffQueuePoller {
    inner: Arc<StaffPollInner>,
    cancel: CancellationToken,
}

impl StaffQueuePoller {
    /// Start polling the full queue on the given cadence
    pub fn start(backend: Arc<dyn Backend>, period: Duration) -> Self {
        let inner = Arc::new(StaffPollInner {
            backend,
            cell: Mutex::new(PollCell::new()),
        });
        let cancel = CancellationToken::new();

        let task_inner = Arc::clone(&inner);
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut tick: u64 = 0;
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => {
                        tracing::debug!("Staff queue poller stopped");
                        break;
                    }
                    _ = timer.tick() => {
                        tick += 1;
                        let n = tick;
                        let inner = Arc::clone(&task_inner);
                        tokio::spawn(async move { inner.poll_once(n).await });
                    }
                }
            }
        });

        Self { inner, cancel }
    }

    /// Last applied queue snapshot, storage order
    pub fn snapshot(&self) -> Vec<Order> {
        self.inner.cell.lock().orders.clone()
    }

    /// One status column, oldest first
    pub fn column(&self, status: OrderStatus) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .inner
            .cell
            .lock()
            .orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.created_at);
        orders
    }

    /// Cancel the timer; pending fetch results are discarded
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for StaffQueuePoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
