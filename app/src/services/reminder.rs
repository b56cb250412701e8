//! Reminder Scheduler
//!
//! Turns a record's due date into a one-shot local notification request.

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{DomainError, DomainResult, RentalRecord};
use crate::summary::format_amount;

pub const DEFAULT_REMINDER_HOUR: u32 = 9;
pub const DEFAULT_CURRENCY: &str = "₹";

/// A request for a local notification at an absolute local wall-clock time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub trigger: NaiveDateTime,
}

/// Platform notification service
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Schedule a one-shot notification, returning its platform id
    async fn schedule(&self, request: NotificationRequest) -> DomainResult<String>;

    /// Withdraw a notification that has not fired; unknown ids are ignored
    async fn cancel(&self, id: &str) -> DomainResult<()>;
}

/// Keeps at most one pending reminder per cart
pub struct ReminderScheduler {
    notifier: Arc<dyn Notifier>,
    remind_at: NaiveTime,
    currency: String,
    // cart id -> notification id
    scheduled: HashMap<String, String>,
}

impl ReminderScheduler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            remind_at: NaiveTime::from_hms_opt(DEFAULT_REMINDER_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
            currency: DEFAULT_CURRENCY.to_string(),
            scheduled: HashMap::new(),
        }
    }

    /// Change the time of day reminders fire at
    pub fn with_time(mut self, hour: u32, minute: u32) -> DomainResult<Self> {
        self.remind_at = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            DomainError::InvalidInput(format!("invalid reminder time {:02}:{:02}", hour, minute))
        })?;
        Ok(self)
    }

    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_string();
        self
    }

    /// Build the notification for a record; `None` without a usable due date
    pub fn request_for(&self, record: &RentalRecord) -> Option<NotificationRequest> {
        let due = record.due()?;
        let rent = record
            .rent_amount()
            .map(format_amount)
            .unwrap_or_else(|| record.monthly_rent.clone());
        Some(NotificationRequest {
            title: format!("Rent Due: {}", record.cart_id),
            body: format!("Renter: {}, {}{}", record.renter_name, self.currency, rent),
            trigger: due.and_time(self.remind_at),
        })
    }

    /// Request a reminder for `record`, replacing any earlier one for the
    /// same cart.
    ///
    /// Scheduling failures are logged and swallowed; the caller's record
    /// change stands either way.
    pub async fn schedule(&mut self, record: &RentalRecord) -> Option<String> {
        self.cancel(&record.cart_id).await;

        let request = match self.request_for(record) {
            Some(request) => request,
            None => {
                if !record.due_date.trim().is_empty() {
                    log::debug!(
                        "No reminder for {}: unparseable due date '{}'",
                        record.cart_id,
                        record.due_date
                    );
                }
                return None;
            }
        };
        let trigger = request.trigger;
        match self.notifier.schedule(request).await {
            Ok(id) => {
                log::info!("Reminder {} scheduled for {} at {}", id, record.cart_id, trigger);
                self.scheduled.insert(record.cart_id.clone(), id.clone());
                Some(id)
            }
            Err(e) => {
                log::warn!("Failed to schedule reminder for {}: {}", record.cart_id, e);
                None
            }
        }
    }

    /// Drop the cart's pending reminder, if any
    pub async fn cancel(&mut self, cart_id: &str) {
        let Some(id) = self.scheduled.remove(cart_id) else {
            return;
        };
        match self.notifier.cancel(&id).await {
            Ok(()) => log::debug!("Reminder {} for {} cancelled", id, cart_id),
            Err(e) => log::warn!("Failed to cancel reminder {} for {}: {}", id, cart_id, e),
        }
    }
}

/// A notification whose trigger time has been reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredNotification {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// In-process notifier backed by tokio timers.
///
/// Fired notifications are sent on the channel returned by [`LocalNotifier::new`];
/// the host decides how to present them.
pub struct LocalNotifier {
    tx: mpsc::UnboundedSender<DeliveredNotification>,
    pending: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
    next_id: AtomicU64,
}

impl LocalNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeliveredNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            tx,
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        };
        (notifier, rx)
    }

    fn abort(&self, id: &str) -> bool {
        let handle = match self.pending.lock() {
            Ok(mut pending) => pending.remove(id),
            Err(_) => None,
        };
        match handle {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Notifier for LocalNotifier {
    async fn schedule(&self, request: NotificationRequest) -> DomainResult<String> {
        let at = Local
            .from_local_datetime(&request.trigger)
            .earliest()
            .ok_or_else(|| {
                DomainError::Scheduling(format!("{} does not exist in local time", request.trigger))
            })?;
        let delay = (at - Local::now())
            .to_std()
            .map_err(|_| DomainError::Scheduling(format!("{} is in the past", request.trigger)))?;

        let id = format!("reminder-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| DomainError::Internal("reminder table poisoned".to_string()))?;

        let task_id = id.clone();
        let task_pending = Arc::clone(&self.pending);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut pending) = task_pending.lock() {
                pending.remove(&task_id);
            }
            let _ = tx.send(DeliveredNotification {
                id: task_id,
                title: request.title,
                body: request.body,
            });
        });
        pending.insert(id.clone(), handle);
        Ok(id)
    }

    async fn cancel(&self, id: &str) -> DomainResult<()> {
        if !self.abort(id) {
            log::debug!("Reminder {} already fired or unknown", id);
        }
        Ok(())
    }
}
