//! Upload form with drag & drop support.
//!
//! Handles file selection, format choice and submission. The
//! upload/process flow itself lives in [`crate::services::submission`].

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::config::{ACCEPTED_FILE_TYPES, API_BASE_URL};
use crate::services::{submit, HttpConversionApi};
use crate::types::{FileListView, OutputFormat, PendingFiles};
use crate::ui::UiHandles;

fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadSection(ui: UiHandles) -> impl IntoView {
    let pending = create_rw_signal(PendingFiles::<File>::default());
    let (format, set_format) = create_signal(OutputFormat::default());
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    // Picker and drop both end up here
    let select_files = move |list: Option<FileList>| {
        let files = list.as_ref().map(collect_files).unwrap_or_default();
        log::debug!("{} file(s) selected", files.len());
        pending.set(PendingFiles::new(files));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        select_files(input.files());
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_drag_leave = move |_: DragEvent| {
        set_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        select_files(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_format_change = move |ev: Event| {
        if let Some(selected) = OutputFormat::from_label(&event_target_value(&ev)) {
            set_format.set(selected);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let files = pending.get_untracked();
        let format = format.get_untracked();
        spawn_local(async move {
            let api = HttpConversionApi::new(API_BASE_URL);
            let outcome = submit(&api, &ui, &files, format).await;
            log::debug!("Submission finished: {:?}", outcome);
        });
    };

    view! {
        <form class="card mb-4" id="uploadForm" on:submit=on_submit>
            <div class="card-body">
                <div
                    class=move || if dragging.get() {
                        "upload-area border border-2 border-dashed rounded p-4 text-center border-primary"
                    } else {
                        "upload-area border border-2 border-dashed rounded p-4 text-center"
                    }
                    on:click=trigger_file_input
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <i class="bi bi-cloud-arrow-up fs-1 text-primary"></i>
                    <div class="mt-2">"Drop files here or click to browse"</div>
                    <div class="small text-muted">"PDF, CSV, JSON or TXT"</div>
                </div>

                <input
                    type="file"
                    id="files"
                    class="d-none"
                    multiple=true
                    accept=ACCEPTED_FILE_TYPES
                    node_ref=file_input
                    on:change=on_file_change
                />

                <div class="mt-3 small" id="fileList">
                    {move || match pending.with(|files| files.listing()) {
                        FileListView::Placeholder => view! {
                            <span class="text-muted">
                                <i class="bi bi-info-circle me-1"></i>
                                "No files selected"
                            </span>
                        }.into_view(),
                        FileListView::Files(names) => names
                            .into_iter()
                            .map(|name| view! {
                                <div class="text-primary">
                                    <i class="bi bi-file-earmark-text me-2"></i>
                                    {name}
                                </div>
                            })
                            .collect_view(),
                    }}
                </div>

                <div class="row g-2 align-items-end mt-3">
                    <div class="col-sm-8">
                        <label for="format" class="form-label">"Output format"</label>
                        <select class="form-select" id="format" on:change=on_format_change>
                            {OutputFormat::ALL
                                .into_iter()
                                .map(|option| view! {
                                    <option
                                        value=option.label()
                                        selected=option == OutputFormat::default()
                                    >
                                        {option.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="col-sm-4 d-grid">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || ui.phase.get().is_busy()
                        >
                            <i class="bi bi-gear me-1"></i>
                            "Convert"
                        </button>
                    </div>
                </div>
            </div>
        </form>
    }
}
