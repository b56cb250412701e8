//! Thela Rental Backend
//!
//! Layered architecture:
//! - domain: Rental records, form and error types
//! - repository: Key-value storage and the record store
//! - services: Reminder scheduling and document handling
//! - query / summary: Derived views over the store
//! - commands: Handlers the host UI calls

use std::path::Path;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

pub mod commands;
pub mod config;
pub mod domain;
pub mod query;
pub mod repository;
pub mod services;
pub mod summary;

#[cfg(test)]
mod testing;

use config::{AppConfig, CONFIG_FILE};
use domain::{DomainResult, RentalForm};
use query::ViewOptions;
use repository::{CartStorage, KeyValueStore, RecordStore, SqliteKvStore};
use services::{
    AttachmentHandler, DeliveredNotification, DocumentPicker, LocalNotifier, Notifier,
    ReminderScheduler, SystemUrlOpener, UrlOpener,
};

/// Application state shared across commands
pub struct AppState {
    pub store: Mutex<RecordStore>,
    pub view: Mutex<ViewOptions>,
    pub form: Mutex<RentalForm>,
    pub attachments: AttachmentHandler,
}

impl AppState {
    pub fn new(store: RecordStore, attachments: AttachmentHandler) -> Self {
        Self {
            store: Mutex::new(store),
            view: Mutex::new(ViewOptions::default()),
            form: Mutex::new(RentalForm::default()),
            attachments,
        }
    }
}

/// Platform capabilities supplied by the host
pub struct Platform {
    pub kv: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
    pub picker: Arc<dyn DocumentPicker>,
    pub opener: Arc<dyn UrlOpener>,
}

/// Wire the store and services from explicit capabilities
pub async fn build_state(config: &AppConfig, platform: Platform) -> DomainResult<AppState> {
    let reminders = ReminderScheduler::new(platform.notifier)
        .with_time(config.reminder_hour, config.reminder_minute)?
        .with_currency(&config.currency_symbol);
    let store = RecordStore::init(CartStorage::new(platform.kv), reminders).await?;
    let attachments = AttachmentHandler::new(platform.picker, platform.opener);
    Ok(AppState::new(store, attachments))
}

/// Start the backend from a data directory: config, logging, SQLite storage
/// and the in-process reminder timer. Fired reminders arrive on the
/// returned channel.
pub async fn run(
    data_dir: &Path,
    picker: Arc<dyn DocumentPicker>,
) -> Result<(AppState, mpsc::UnboundedReceiver<DeliveredNotification>), String> {
    let config = AppConfig::load_or_create(&data_dir.join(CONFIG_FILE))
        .await
        .map_err(|e| e.to_string())?;

    if let Err(e) = rolling_logger::init_logger(config.log_path(), "ThelaRental") {
        eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
    }

    let kv = SqliteKvStore::open(&config.db_path()).map_err(|e| {
        let _ = rolling_logger::error(&format!("DB open failed: {}", e));
        e.to_string()
    })?;
    let (notifier, deliveries) = LocalNotifier::new();

    let platform = Platform {
        kv: Arc::new(kv),
        notifier: Arc::new(notifier),
        picker,
        opener: Arc::new(SystemUrlOpener),
    };
    let state = build_state(&config, platform).await.map_err(|e| e.to_string())?;
    let _ = rolling_logger::info("Backend ready");
    Ok((state, deliveries))
}
