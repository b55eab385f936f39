//! Document Upload Panel - Model (API functions)

use crate::shared::api_utils::send_json;
use async_trait::async_trait;
use contracts::domain::a002_document_upload::aggregate::{UploadResponse, UPLOAD_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

/// Backend side of the upload flow
#[async_trait(?Send)]
pub trait UploadApi {
    type File;

    async fn upload(&self, file: Self::File) -> Result<UploadResponse, String>;
}

/// The single part of the multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field: &'static str,
    pub filename: String,
}

impl UploadPart {
    /// Part for a file, keeping the file's own name
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            field: UPLOAD_FIELD,
            filename: filename.into(),
        }
    }
}

/// `UploadApi` over `fetch` with a multipart body
#[derive(Debug, Clone)]
pub struct HttpUploadApi {
    url: String,
}

impl HttpUploadApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl UploadApi for HttpUploadApi {
    type File = web_sys::File;

    async fn upload(&self, file: web_sys::File) -> Result<UploadResponse, String> {
        let part = UploadPart::for_file(file.name());
        let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
        form_data
            .append_with_blob_and_filename(part.field, &file, &part.filename)
            .map_err(|e| format!("{e:?}"))?;

        // no Content-Type header: the browser adds the multipart boundary
        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| e.to_string())?;
        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_uses_file_field_and_own_name() {
        assert_eq!(
            UploadPart::for_file("doc.pdf"),
            UploadPart {
                field: "file",
                filename: "doc.pdf".to_string(),
            }
        );
    }
}
