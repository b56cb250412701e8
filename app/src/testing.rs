//! Test doubles for the platform traits

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::{DomainError, DomainResult, FileRef};
use crate::repository::{KeyValueStore, MemoryKvStore};
use crate::services::{DocumentPicker, NotificationRequest, Notifier, UrlOpener};

pub struct RecordingNotifier {
    requests: Mutex<Vec<(String, NotificationRequest)>>,
    cancelled: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Every request ever scheduled
    pub fn requests(&self) -> Vec<NotificationRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    /// Requests that were not cancelled
    pub fn active(&self) -> Vec<NotificationRequest> {
        let cancelled = self.cancelled();
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| !cancelled.contains(id))
            .map(|(_, request)| request.clone())
            .collect()
    }

    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn schedule(&self, request: NotificationRequest) -> DomainResult<String> {
        if self.fail {
            return Err(DomainError::Scheduling("permission denied".to_string()));
        }
        let mut requests = self.requests.lock().unwrap();
        let id = format!("n{}", requests.len() + 1);
        requests.push((id.clone(), request));
        Ok(id)
    }

    async fn cancel(&self, id: &str) -> DomainResult<()> {
        self.cancelled.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

/// Memory store whose reads and writes can be made to fail
#[derive(Default)]
pub struct FlakyKvStore {
    inner: MemoryKvStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyKvStore {
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("read failed".to_string()));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("write failed".to_string()));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.inner.remove_item(key).await
    }
}

pub struct FakePicker {
    result: Option<FileRef>,
}

impl FakePicker {
    pub fn returning(result: Option<FileRef>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl DocumentPicker for FakePicker {
    async fn pick(&self) -> DomainResult<Option<FileRef>> {
        Ok(self.result.clone())
    }
}

pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, uri: &str) -> DomainResult<()> {
        self.opened.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}
