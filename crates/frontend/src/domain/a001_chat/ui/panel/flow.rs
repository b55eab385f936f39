//! Chat Panel - Flow
//!
//! One submission: optimistic user entry, request, bot entry, scroll.

use super::model::ChatApi;
use crate::shared::flow::{FlowState, InFlight, InputField, MessageLog};
use contracts::domain::a001_chat::aggregate::ChatMessage;
use std::future::Future;
use std::rc::Rc;

pub struct ChatFlow<I, L, A> {
    input: I,
    log: L,
    api: Rc<A>,
    in_flight: InFlight,
}

impl<I, L, A> ChatFlow<I, L, A>
where
    I: InputField,
    L: MessageLog + Clone + 'static,
    A: ChatApi + 'static,
{
    pub fn new(input: I, log: L, api: A) -> Self {
        Self {
            input,
            log,
            api: Rc::new(api),
            in_flight: InFlight::new(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.in_flight.state()
    }

    /// Handle a form submission.
    ///
    /// Returns `None` when the trimmed input is empty; nothing on the page is
    /// touched in that case. Otherwise the user entry is appended and the
    /// input cleared before this returns, and the returned future performs
    /// the request. Submissions are independent: several futures may be
    /// pending at once and their bot entries land in completion order.
    pub fn submit(&self) -> Option<impl Future<Output = Result<(), String>> + 'static> {
        let text = self.input.value().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.log.append(ChatMessage::user(text.clone()));
        self.input.clear();

        let api = Rc::clone(&self.api);
        let log = self.log.clone();
        let guard = self.in_flight.enter();
        log::debug!("chat: sending {} chars", text.chars().count());

        Some(async move {
            let _guard = guard;
            let reply = api.send_message(&text).await?;
            log::debug!("chat: reply received");
            log.append(ChatMessage::bot(reply.response));
            log.scroll_to_end();
            Ok(())
        })
    }
}
