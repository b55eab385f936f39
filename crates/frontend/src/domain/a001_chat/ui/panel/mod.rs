//! Chat Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: ChatApi and its HTTP implementation
//! - flow.rs: ChatFlow, the submit-to-response cycle
//! - view_model.rs: ChatPanelVm with RwSignals and the page handles
//! - view.rs: Main component ChatPanel

mod flow;
mod model;
mod view;
mod view_model;

pub use flow::ChatFlow;
pub use model::{ChatApi, HttpChatApi};
pub use view::ChatPanel;
pub use view_model::{ChatPanelVm, SignalInput, SignalLog};
