//! Chat Panel - View Component

use super::flow::ChatFlow;
use super::model::HttpChatApi;
use super::view_model::ChatPanelVm;
use crate::shared::config::AppConfig;
use contracts::domain::a001_chat::aggregate::ChatMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = ChatPanelVm::new();
    let flow = StoredValue::new_local(ChatFlow::new(
        vm.input_handle(),
        vm.log_handle(),
        HttpChatApi::new(config.chat_url()),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(pending) = flow.with_value(|flow| flow.submit()) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = pending.await {
                log::error!("Chat request failed: {}", e);
            }
        });
    };

    view! {
        <section class="chat-panel">
            <h2>"Chat"</h2>

            <div id="messages" class="messages" node_ref=vm.log_ref>
                <For
                    each=move || vm.messages.get().into_iter().enumerate()
                    key=|(idx, _): &(usize, ChatMessage)| *idx
                    children=move |(_, msg): (usize, ChatMessage)| {
                        let class = format!("msg {}", msg.role.as_str());
                        view! { <div class=class>{msg.to_string()}</div> }
                    }
                />
            </div>

            <form id="chatForm" on:submit=on_submit>
                <Flex vertical=false gap=FlexGap::Small>
                    <input
                        type="text"
                        id="userInput"
                        placeholder="Escribe tu mensaje..."
                        autocomplete="off"
                        prop:value=move || vm.input.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Enviar"</button>
                </Flex>
            </form>
        </section>
    }
}
