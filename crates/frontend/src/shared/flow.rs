//! Handles and state shared by the page flows.
//!
//! A flow never looks anything up on the page by itself: it is given one
//! handle per piece of the page it reads or writes. Production handles wrap
//! Leptos signals and node refs; tests use in-memory ones.

use contracts::domain::a001_chat::aggregate::ChatMessage;
use contracts::domain::a002_document_upload::aggregate::UploadStatus;
use std::cell::Cell;
use std::rc::Rc;

/// Text input of a form
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}

/// Append-only view of chat entries
pub trait MessageLog {
    fn append(&self, message: ChatMessage);
    fn scroll_to_end(&self);
}

/// Single status line, overwritten on every update
pub trait StatusView {
    fn set(&self, status: UploadStatus);
}

/// File input of a form
pub trait FileSource {
    type File;

    fn first_file(&self) -> Option<Self::File>;
}

/// State of one flow's request/response cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingResponse,
}

/// Counter of unsettled requests of one flow.
///
/// Submissions are not serialized, so several requests may be pending at
/// once; the flow is idle only when all of them have settled.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<usize>>);

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one request as pending until the returned guard is dropped
    pub fn enter(&self) -> InFlightGuard {
        self.0.set(self.0.get() + 1);
        InFlightGuard(Rc::clone(&self.0))
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }

    pub fn state(&self) -> FlowState {
        if self.count() == 0 {
            FlowState::Idle
        } else {
            FlowState::AwaitingResponse
        }
    }
}

#[derive(Debug)]
pub struct InFlightGuard(Rc<Cell<usize>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        assert_eq!(InFlight::new().state(), FlowState::Idle);
    }

    #[test]
    fn test_guard_tracks_pending_requests() {
        let in_flight = InFlight::new();
        let first = in_flight.enter();
        let second = in_flight.enter();
        assert_eq!(in_flight.count(), 2);
        assert_eq!(in_flight.state(), FlowState::AwaitingResponse);

        drop(first);
        assert_eq!(in_flight.state(), FlowState::AwaitingResponse);
        drop(second);
        assert_eq!(in_flight.state(), FlowState::Idle);
    }
}
