//! Spreadsheet generator ("Excel" page)

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use deskmate_domain::{FileRequest, GeneratedFile, Result};
use parking_lot::Mutex;
use tracing::{info, instrument, warn};

use super::{is_blank, Page, PageContext};
use crate::forms::FormState;
use crate::navigation::Route;
use crate::ports::FileSink;
use crate::view_state::{Applied, LoadPhase, Resource};

/// Example table offered to fill the data field.
pub const SAMPLE_DATA: &str = r#"[
  {
    "Month": "January",
    "Sales": 12000,
    "Expenses": 8000
  },
  {
    "Month": "February",
    "Sales": 15000,
    "Expenses": 9000
  },
  {
    "Month": "March",
    "Sales": 18000,
    "Expenses": 10000
  }
]"#;

/// Create-file form fields, both free text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDraft {
    pub request_text: String,
    /// Optional JSON; blank means no data.
    pub data: String,
}

impl FileDraft {
    /// Parse the draft into a request body.
    ///
    /// Returns the message to show when the draft is not submittable.
    pub fn to_request(&self) -> std::result::Result<FileRequest, &'static str> {
        if is_blank(&self.request_text) {
            return Err("Request description is required");
        }
        let data = if is_blank(&self.data) {
            None
        } else {
            Some(serde_json::from_str(&self.data).map_err(|_| "Invalid JSON data format")?)
        };
        Ok(FileRequest { request_text: self.request_text.clone(), data })
    }
}

pub struct FilesPage {
    ctx: PageContext,
    sink: Arc<dyn FileSink>,
    files: Resource<Vec<GeneratedFile>>,
    form: Mutex<FormState<FileDraft>>,
}

impl FilesPage {
    pub fn new(ctx: PageContext, sink: Arc<dyn FileSink>) -> Self {
        Self { ctx, sink, files: Resource::new("excel"), form: Mutex::new(FormState::new()) }
    }

    pub async fn load(&self) -> Applied {
        self.files.load(self.ctx.api.list_files()).await
    }

    pub fn files(&self) -> Vec<GeneratedFile> {
        self.files.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.files.phase()
    }

    pub fn resource(&self) -> &Resource<Vec<GeneratedFile>> {
        &self.files
    }

    pub fn open_create(&self) {
        self.form.lock().open();
    }

    pub fn close_create(&self) {
        self.form.lock().close();
    }

    pub fn is_create_open(&self) -> bool {
        self.form.lock().is_open()
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut FileDraft)) {
        edit(self.form.lock().draft_mut());
    }

    pub fn draft(&self) -> FileDraft {
        self.form.lock().draft().clone()
    }

    pub fn fill_sample_data(&self) {
        self.form.lock().draft_mut().data = SAMPLE_DATA.to_string();
    }

    /// `POST /excel/create`
    #[instrument(skip(self))]
    pub async fn submit_create(&self) -> Result<()> {
        let request = match self.draft().to_request() {
            Ok(request) => request,
            Err(message) => return Err(self.ctx.reject(message)),
        };

        self.ctx
            .write(
                "create_file",
                self.ctx.api.create_file(&request),
                "File created successfully",
                "Failed to create file",
            )
            .await?;

        self.form.lock().close_and_reset();
        self.load().await;
        Ok(())
    }

    /// Fetch a file's bytes and save them as `file_{id}.xlsx`.
    ///
    /// Leaves the file list untouched; only a failure is notified.
    #[instrument(skip(self))]
    pub async fn download(&self, id: &str) -> Result<PathBuf> {
        let saved = match self.ctx.api.download_file(id).await {
            Ok(bytes) => self.sink.save(&GeneratedFile::download_name(id), bytes).await,
            Err(err) => Err(err),
        };

        match saved {
            Ok(path) => {
                info!(file_id = id, path = %path.display(), "file downloaded");
                Ok(path)
            }
            Err(err) => {
                warn!(file_id = id, error = %err, "download failed");
                self.ctx.notify_failure(&err, "Failed to download file");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl Page for FilesPage {
    fn route(&self) -> Route {
        Route::Excel
    }

    async fn mount(&self) {
        self.load().await;
    }
}
