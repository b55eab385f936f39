use crate::domain::a001_chat::ui::panel::ChatPanel;
use crate::domain::a002_document_upload::ui::panel::UploadPanel;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint configuration for both panels.
    provide_context(AppConfig::load());

    view! {
        <main class="page">
            <h1>"Chatbot"</h1>
            <Flex vertical=false gap=FlexGap::Large>
                <ChatPanel />
                <UploadPanel />
            </Flex>
        </main>
    }
}
