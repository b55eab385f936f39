//! Document Upload Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: UploadApi and its multipart HTTP implementation
//! - flow.rs: UploadFlow, the submit-to-status cycle
//! - view_model.rs: UploadPanelVm with RwSignals and the page handles
//! - view.rs: Main component UploadPanel

mod flow;
mod model;
mod view;
mod view_model;

pub use flow::UploadFlow;
pub use model::{HttpUploadApi, UploadApi, UploadPart};
pub use view::UploadPanel;
pub use view_model::{FileInputRef, SignalStatus, UploadPanelVm};
