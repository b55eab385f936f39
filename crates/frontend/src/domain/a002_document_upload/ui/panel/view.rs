//! Document Upload Panel - View Component

use super::flow::UploadFlow;
use super::model::HttpUploadApi;
use super::view_model::UploadPanelVm;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = UploadPanelVm::new();
    let flow = StoredValue::new_local(UploadFlow::new(
        vm.file_handle(),
        vm.status_handle(),
        HttpUploadApi::new(config.upload_url()),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(pending) = flow.with_value(|flow| flow.submit()) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = pending.await {
                log::error!("Upload request failed: {}", e);
            }
        });
    };

    view! {
        <section class="upload-panel">
            <h2>"Subir documento"</h2>

            <form id="uploadForm" on:submit=on_submit>
                <Flex vertical=false gap=FlexGap::Small>
                    <input type="file" id="fileInput" node_ref=vm.file_ref />
                    <button type="submit" class="btn-primary">"Subir"</button>
                </Flex>
            </form>

            <p id="uploadStatus" class="upload-status">{move || vm.status.get()}</p>
        </section>
    }
}
