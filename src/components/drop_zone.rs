//! Drop zone for the search-history export.
//!
//! Accepts a file by drag-and-drop or by clicking to browse, then runs the
//! intake pipeline and moves on to the book once the story is stored.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::backend::HttpStoryBackend;
use crate::context::{use_config, use_story_context};
use crate::error::IntakeError;
use crate::intake::{submit_story, validate_file, IntakePhase, UploadedFile};
use crate::story::LocalStoryStore;

#[component]
pub fn StoryDropZone() -> impl IntoView {
    let config = use_config();
    let story_ctx = use_story_context();
    let navigate = use_navigate();

    let (phase, set_phase) = signal(IntakePhase::Idle);
    let (is_over, set_is_over) = signal(false);
    let file_input = NodeRef::<Input>::new();

    let handle_file = move |file: web_sys::File| {
        if !phase.get_untracked().accepts_files() {
            log::debug!("Ignoring {} while an upload is pending", file.name());
            return;
        }

        let selected = UploadedFile::from_web_file(&file);
        log::info!(
            "Selected {} ({} bytes, {:?})",
            selected.name,
            selected.size,
            selected.content_type
        );
        if let Err(e) = validate_file(&selected, config.max_upload_bytes) {
            log::warn!("Rejected {}: {:?}", selected.name, e);
            set_phase.set(IntakePhase::Failed {
                message: e.to_string(),
            });
            return;
        }

        set_phase.set(IntakePhase::Submitting {
            file_name: selected.name.clone(),
        });

        let backend = HttpStoryBackend::from_config(&config);
        let store = LocalStoryStore::new(config.storage_key.clone());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match read_file_text(&file).await {
                Ok(contents) => submit_story(&backend, &store, &contents).await,
                Err(e) => {
                    log::error!("{}", e);
                    Err(IntakeError::InvalidJson)
                }
            };

            match result {
                Ok(story) => {
                    story_ctx.publish(story);
                    set_phase.set(IntakePhase::Done {
                        file_name: selected.name,
                    });
                    navigate("/book", Default::default());
                }
                Err(e) => {
                    set_phase.set(IntakePhase::Failed {
                        message: e.to_string(),
                    });
                }
            }
        });
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            set_is_over.set(false);

            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let on_input_change = move |_: web_sys::Event| {
        let Some(input) = file_input.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // Allow picking the same file again after a failure.
        input.set_value("");
    };

    let open_picker = move |_| {
        if phase.get_untracked().accepts_files() {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    view! {
        <div class="story-upload">
            <style>{include_str!("drop_zone.css")}</style>
            <h2 class="upload-title">"Upload Your Search History"</h2>

            <div
                class="drop-zone"
                class:drop-zone-active=move || is_over.get()
                class:drop-zone-busy=move || !phase.get().accepts_files()
                class:drop-zone-done=move || matches!(phase.get(), IntakePhase::Done { .. })
                on:click=open_picker
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                <input
                    node_ref=file_input
                    type="file"
                    accept=".json"
                    style="display: none"
                    on:change=on_input_change
                />
                {move || match phase.get() {
                    IntakePhase::Submitting { file_name } => view! {
                        <div class="drop-zone-content">
                            <div class="spinner"></div>
                            <p class="drop-main">"Writing your story..."</p>
                            <p class="drop-hint">{file_name}</p>
                        </div>
                    }.into_any(),
                    IntakePhase::Done { file_name } => view! {
                        <div class="drop-zone-content">
                            <p class="drop-main drop-success">"File uploaded successfully!"</p>
                            <p class="drop-hint">{file_name}</p>
                        </div>
                    }.into_any(),
                    IntakePhase::Idle | IntakePhase::Failed { .. } => view! {
                        <div class="drop-zone-content">
                            <p class="drop-main">"Drag & drop your JSON file here"</p>
                            <p class="drop-hint">"or click to browse"</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <Show when=move || phase.get().error().is_some()>
                <p class="upload-error">{move || phase.get().error().map(str::to_string).unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Read a File's full contents as text.
async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .as_string()
        .ok_or_else(|| "File contents were not text".to_string())
}
