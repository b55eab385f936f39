//! Chat Panel - View Model

use crate::shared::flow::{InputField, MessageLog};
use contracts::domain::a001_chat::aggregate::ChatMessage;
use leptos::html::Div;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub log_ref: NodeRef<Div>,
}

impl ChatPanelVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            log_ref: NodeRef::new(),
        }
    }

    pub fn input_handle(&self) -> SignalInput {
        SignalInput(self.input)
    }

    pub fn log_handle(&self) -> SignalLog {
        SignalLog {
            messages: self.messages,
            container: self.log_ref,
        }
    }
}

impl Default for ChatPanelVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Text input bound to a signal
#[derive(Clone, Copy)]
pub struct SignalInput(pub RwSignal<String>);

impl InputField for SignalInput {
    fn value(&self) -> String {
        self.0.get_untracked()
    }

    fn clear(&self) {
        self.0.set(String::new());
    }
}

/// Message list: the entries signal plus the scrollable container
#[derive(Clone, Copy)]
pub struct SignalLog {
    messages: RwSignal<Vec<ChatMessage>>,
    container: NodeRef<Div>,
}

impl MessageLog for SignalLog {
    fn append(&self, message: ChatMessage) {
        self.messages.update(|messages| messages.push(message));
    }

    fn scroll_to_end(&self) {
        if let Some(container) = self.container.get_untracked() {
            // wait for the new entry to be rendered
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    }
}
