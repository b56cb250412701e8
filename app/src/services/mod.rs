//! Platform Services
//!
//! Reminder scheduling and document handling behind injectable traits.

mod attachment;
mod reminder;

pub use attachment::{AttachmentHandler, DocumentPicker, SystemUrlOpener, UrlOpener};
pub use reminder::{
    DeliveredNotification, LocalNotifier, NotificationRequest, Notifier, ReminderScheduler,
    DEFAULT_CURRENCY, DEFAULT_REMINDER_HOUR,
};
