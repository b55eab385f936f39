//! Document Upload Panel - Flow

use super::model::UploadApi;
use crate::shared::flow::{FileSource, FlowState, InFlight, StatusView};
use contracts::domain::a002_document_upload::aggregate::UploadStatus;
use std::future::Future;
use std::rc::Rc;

pub struct UploadFlow<F, S, A> {
    files: F,
    status: S,
    api: Rc<A>,
    in_flight: InFlight,
}

impl<F, S, A> UploadFlow<F, S, A>
where
    F: FileSource,
    F::File: 'static,
    S: StatusView + Clone + 'static,
    A: UploadApi<File = F::File> + 'static,
{
    pub fn new(files: F, status: S, api: A) -> Self {
        Self {
            files,
            status,
            api: Rc::new(api),
            in_flight: InFlight::new(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.in_flight.state()
    }

    /// Handle a form submission.
    ///
    /// Without a selected file the status is set to the fixed error text and
    /// `None` is returned. Otherwise the returned future uploads the file and
    /// shows the server message as the new status.
    pub fn submit(&self) -> Option<impl Future<Output = Result<(), String>> + 'static> {
        let Some(file) = self.files.first_file() else {
            log::warn!("upload: no file selected");
            self.status.set(UploadStatus::no_file_selected());
            return None;
        };

        let api = Rc::clone(&self.api);
        let status = self.status.clone();
        let guard = self.in_flight.enter();
        log::debug!("upload: sending file");

        Some(async move {
            let _guard = guard;
            let reply = api.upload(file).await?;
            log::debug!("upload: {}", reply.message);
            status.set(UploadStatus::from_response(&reply));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a002_document_upload::aggregate::UploadResponse;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct TestFile {
        name: String,
    }

    #[derive(Clone, Default)]
    struct TestFileInput(Rc<RefCell<Option<TestFile>>>);

    impl TestFileInput {
        fn select(&self, name: &str) {
            *self.0.borrow_mut() = Some(TestFile {
                name: name.to_string(),
            });
        }
    }

    impl FileSource for TestFileInput {
        type File = TestFile;

        fn first_file(&self) -> Option<TestFile> {
            self.0.borrow().clone()
        }
    }

    #[derive(Clone, Default)]
    struct TestStatus(Rc<RefCell<Vec<UploadStatus>>>);

    impl TestStatus {
        fn current(&self) -> Option<String> {
            self.0.borrow().last().map(|s| s.to_string())
        }
    }

    impl StatusView for TestStatus {
        fn set(&self, status: UploadStatus) {
            self.0.borrow_mut().push(status);
        }
    }

    /// Records uploaded file names and answers with a fixed result
    struct TestUploadApi {
        uploaded: Rc<RefCell<Vec<String>>>,
        reply: Result<String, String>,
    }

    impl TestUploadApi {
        fn replying(reply: Result<&str, &str>) -> Self {
            Self {
                uploaded: Rc::default(),
                reply: reply.map(str::to_string).map_err(str::to_string),
            }
        }
    }

    #[async_trait(?Send)]
    impl UploadApi for TestUploadApi {
        type File = TestFile;

        async fn upload(&self, file: TestFile) -> Result<UploadResponse, String> {
            self.uploaded.borrow_mut().push(file.name);
            self.reply
                .clone()
                .map(|message| UploadResponse { message })
        }
    }

    #[test]
    fn test_no_file_selected() {
        let files = TestFileInput::default();
        let status = TestStatus::default();
        let api = TestUploadApi::replying(Ok("Documento recibido"));
        let uploaded = Rc::clone(&api.uploaded);
        let flow = UploadFlow::new(files, status.clone(), api);

        assert!(flow.submit().is_none());
        assert_eq!(status.current().as_deref(), Some("❌ Selecciona un archivo."));
        assert!(uploaded.borrow().is_empty());
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_doc_pdf_scenario() {
        let files = TestFileInput::default();
        let status = TestStatus::default();
        let api = TestUploadApi::replying(Ok("Documento recibido"));
        let uploaded = Rc::clone(&api.uploaded);
        let flow = UploadFlow::new(files.clone(), status.clone(), api);

        files.select("doc.pdf");
        let pending = flow.submit().expect("request");
        assert_eq!(status.current(), None);
        assert_eq!(flow.state(), FlowState::AwaitingResponse);

        pending.await.unwrap();

        assert_eq!(*uploaded.borrow(), vec!["doc.pdf".to_string()]);
        assert_eq!(status.current().as_deref(), Some("📌 Documento recibido"));
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_status_is_overwritten_each_attempt() {
        let files = TestFileInput::default();
        let status = TestStatus::default();
        let api = TestUploadApi::replying(Ok("Documento procesado correctamente."));
        let flow = UploadFlow::new(files.clone(), status.clone(), api);

        assert!(flow.submit().is_none());
        files.select("notas.txt");
        flow.submit().unwrap().await.unwrap();

        assert_eq!(
            status.current().as_deref(),
            Some("📌 Documento procesado correctamente.")
        );
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_status_untouched() {
        let files = TestFileInput::default();
        let status = TestStatus::default();
        let api = TestUploadApi::replying(Err("HTTP 502"));
        let flow = UploadFlow::new(files.clone(), status.clone(), api);

        files.select("doc.pdf");
        let result = flow.submit().unwrap().await;

        assert_eq!(result, Err("HTTP 502".to_string()));
        assert_eq!(status.current(), None);
        assert_eq!(flow.state(), FlowState::Idle);
    }
}
