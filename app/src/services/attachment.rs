//! File Reference Handler
//!
//! Attaches picked proof documents to the form and opens stored references
//! (documents and location links) through the platform.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, FileRef, RentalForm, RentalRecord};

/// Platform document picker
#[async_trait]
pub trait DocumentPicker: Send + Sync {
    /// `None` when the user cancels
    async fn pick(&self) -> DomainResult<Option<FileRef>>;
}

/// Platform URI opener (file URIs, map/geo links)
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, uri: &str) -> DomainResult<()>;
}

/// Opens URIs with the system handler
pub struct SystemUrlOpener;

#[async_trait]
impl UrlOpener for SystemUrlOpener {
    async fn open(&self, uri: &str) -> DomainResult<()> {
        let target = uri.to_string();
        tokio::task::spawn_blocking(move || open::that(&target))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
            .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", uri, e)))
    }
}

pub struct AttachmentHandler {
    picker: Arc<dyn DocumentPicker>,
    opener: Arc<dyn UrlOpener>,
}

impl AttachmentHandler {
    pub fn new(picker: Arc<dyn DocumentPicker>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { picker, opener }
    }

    /// Let the user pick an address-proof document for the form.
    /// A cancelled pick leaves the form untouched.
    pub async fn pick_file(&self, form: &mut RentalForm) -> DomainResult<Option<FileRef>> {
        let picked = self.picker.pick().await?;
        if let Some(file) = &picked {
            log::debug!("Picked address proof {} ({})", file.name, file.uri);
            form.address_proof_file = Some(file.clone());
        }
        Ok(picked)
    }

    /// Attach a local file chosen by the host's own dialog
    pub fn attach_path(&self, form: &mut RentalForm, path: &Path) -> DomainResult<FileRef> {
        if path.file_name().is_none() {
            return Err(DomainError::InvalidInput(format!(
                "not a file path: {}",
                path.display()
            )));
        }
        let file = FileRef::from_path(path);
        log::debug!("Attached address proof {} ({})", file.name, file.uri);
        form.address_proof_file = Some(file.clone());
        Ok(file)
    }

    /// Returns `false` when the reference has no URI to open
    pub async fn open_file(&self, file: &FileRef) -> DomainResult<bool> {
        if !file.is_openable() {
            return Ok(false);
        }
        self.opener.open(&file.uri).await?;
        Ok(true)
    }

    /// Open the record's map link; `false` when none is set
    pub async fn open_location(&self, record: &RentalRecord) -> DomainResult<bool> {
        match record.location() {
            Some(link) => {
                self.opener.open(link).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePicker, RecordingOpener};

    #[tokio::test]
    async fn test_pick_stores_reference_on_form() {
        let file = FileRef::new("aadhaar.pdf", "content://docs/7");
        let handler = AttachmentHandler::new(
            Arc::new(FakePicker::returning(Some(file.clone()))),
            Arc::new(RecordingOpener::new()),
        );
        let mut form = RentalForm::new();

        let picked = handler.pick_file(&mut form).await.unwrap();
        assert_eq!(picked, Some(file.clone()));
        assert_eq!(form.address_proof_file, Some(file));
    }

    #[tokio::test]
    async fn test_cancelled_pick_keeps_form() {
        let handler = AttachmentHandler::new(
            Arc::new(FakePicker::returning(None)),
            Arc::new(RecordingOpener::new()),
        );
        let mut form = RentalForm::new();
        form.address_proof_file = Some(FileRef::new("old.pdf", "content://docs/1"));

        assert_eq!(handler.pick_file(&mut form).await.unwrap(), None);
        assert_eq!(form.address_proof_file.unwrap().name, "old.pdf");
    }

    #[test]
    fn test_attach_path_builds_file_uri() {
        let handler = AttachmentHandler::new(
            Arc::new(FakePicker::returning(None)),
            Arc::new(RecordingOpener::new()),
        );
        let mut form = RentalForm::new();

        let file = handler
            .attach_path(&mut form, Path::new("/sdcard/Download/rent agreement.pdf"))
            .unwrap();
        assert_eq!(file.uri, "file:///sdcard/Download/rent%20agreement.pdf");
        assert_eq!(file.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(form.address_proof_file, Some(file));

        assert!(handler.attach_path(&mut form, Path::new("/")).is_err());
    }

    #[tokio::test]
    async fn test_open_file_and_location() {
        let opener = Arc::new(RecordingOpener::new());
        let handler = AttachmentHandler::new(Arc::new(FakePicker::returning(None)), opener.clone());

        assert!(handler.open_file(&FileRef::new("a.pdf", "content://a")).await.unwrap());
        assert!(!handler.open_file(&FileRef::new("b.pdf", "")).await.unwrap());

        let mut record = RentalRecord::new("C1", "Ramesh", "750");
        assert!(!handler.open_location(&record).await.unwrap());
        record.location_link = "geo:19.07,72.87".to_string();
        assert!(handler.open_location(&record).await.unwrap());

        assert_eq!(opener.opened(), vec!["content://a", "geo:19.07,72.87"]);
    }
}
