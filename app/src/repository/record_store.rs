//! Record Store
//!
//! Owns the ordered list of rental records. Every mutation is written
//! through to storage before it becomes visible; a failed write leaves the
//! in-memory list untouched.

use crate::domain::{DomainError, DomainResult, Entity, RentStatus, RentalRecord, ValidationError};
use crate::services::ReminderScheduler;
use super::cart_storage::CartStorage;

pub struct RecordStore {
    storage: CartStorage,
    reminders: ReminderScheduler,
    records: Vec<RentalRecord>,
}

impl RecordStore {
    /// Load the stored records once; the store keeps them for its lifetime
    pub async fn init(storage: CartStorage, reminders: ReminderScheduler) -> DomainResult<Self> {
        let records = storage.load().await?;
        log::info!("Record store loaded {} records", records.len());
        Ok(Self {
            storage,
            reminders,
            records,
        })
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> Vec<RentalRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn get(&self, cart_id: &str) -> Option<&RentalRecord> {
        let cart_id = cart_id.trim();
        self.records.iter().find(|r| r.cart_id == cart_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new record. Rejects missing required fields and ids that
    /// are already taken.
    pub async fn add(&mut self, mut record: RentalRecord) -> DomainResult<RentalRecord> {
        record.cart_id = record.cart_id.trim().to_string();
        record.validate()?;
        if self.get(&record.cart_id).is_some() {
            return Err(ValidationError::DuplicateCartId(record.id()).into());
        }

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next).await?;
        log::info!("Added cart {}", record.cart_id);

        self.reminders.schedule(&record).await;
        Ok(record)
    }

    /// Replace the record stored under `original_id`, keeping its position.
    /// The cart id may change as long as the new one is free.
    pub async fn update(
        &mut self,
        original_id: &str,
        mut record: RentalRecord,
    ) -> DomainResult<RentalRecord> {
        let original_id = original_id.trim();
        record.cart_id = record.cart_id.trim().to_string();
        record.validate()?;

        let idx = self
            .records
            .iter()
            .position(|r| r.cart_id == original_id)
            .ok_or_else(|| DomainError::NotFound(format!("cart {}", original_id)))?;
        let renamed = record.cart_id != original_id;
        if renamed && self.get(&record.cart_id).is_some() {
            return Err(ValidationError::DuplicateCartId(record.id()).into());
        }

        let mut next = self.records.clone();
        next[idx] = record.clone();
        self.commit(next).await?;
        if renamed {
            log::info!("Updated cart {} (was {})", record.cart_id, original_id);
            self.reminders.cancel(original_id).await;
        } else {
            log::info!("Updated cart {}", record.cart_id);
        }

        self.reminders.schedule(&record).await;
        Ok(record)
    }

    /// Remove every record with this id; returns how many were removed
    pub async fn remove(&mut self, cart_id: &str) -> DomainResult<usize> {
        let cart_id = cart_id.trim();
        let next: Vec<RentalRecord> = self
            .records
            .iter()
            .filter(|r| r.cart_id != cart_id)
            .cloned()
            .collect();
        let removed = self.records.len() - next.len();
        if removed == 0 {
            return Ok(0);
        }

        self.commit(next).await?;
        log::info!("Removed cart {} ({} records)", cart_id, removed);
        self.reminders.cancel(cart_id).await;
        Ok(removed)
    }

    /// Mark every record with this id as paid; returns how many matched
    pub async fn mark_paid(&mut self, cart_id: &str) -> DomainResult<usize> {
        let cart_id = cart_id.trim();
        let mut matched = 0;
        let next: Vec<RentalRecord> = self
            .records
            .iter()
            .map(|r| {
                if r.cart_id == cart_id {
                    matched += 1;
                    RentalRecord {
                        rent_status: RentStatus::Paid,
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();
        if matched == 0 {
            return Ok(0);
        }

        self.commit(next).await?;
        log::info!("Marked cart {} paid", cart_id);
        self.reminders.cancel(cart_id).await;
        Ok(matched)
    }

    async fn commit(&mut self, next: Vec<RentalRecord>) -> DomainResult<()> {
        if let Err(e) = self.storage.save(&next).await {
            log::error!("Failed to persist records: {}", e);
            return Err(e);
        }
        self.records = next;
        Ok(())
    }
}
