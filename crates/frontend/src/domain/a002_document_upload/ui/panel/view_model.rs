//! Document Upload Panel - View Model

use crate::shared::flow::{FileSource, StatusView};
use contracts::domain::a002_document_upload::aggregate::UploadStatus;
use leptos::html::Input;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UploadPanelVm {
    pub status: RwSignal<String>,
    pub file_ref: NodeRef<Input>,
}

impl UploadPanelVm {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(String::new()),
            file_ref: NodeRef::new(),
        }
    }

    pub fn status_handle(&self) -> SignalStatus {
        SignalStatus(self.status)
    }

    pub fn file_handle(&self) -> FileInputRef {
        FileInputRef(self.file_ref)
    }
}

impl Default for UploadPanelVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line bound to a signal
#[derive(Clone, Copy)]
pub struct SignalStatus(pub RwSignal<String>);

impl StatusView for SignalStatus {
    fn set(&self, status: UploadStatus) {
        self.0.set(status.into_inner());
    }
}

/// `<input type="file">` of the upload form
#[derive(Clone, Copy)]
pub struct FileInputRef(pub NodeRef<Input>);

impl FileSource for FileInputRef {
    type File = web_sys::File;

    fn first_file(&self) -> Option<web_sys::File> {
        self.0.get_untracked()?.files()?.get(0)
    }
}
