//! Processing log panel.
//!
//! Append-only list of timestamped lines with auto-scroll. Only the
//! Clear button removes entries.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::ui::UiHandles;

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[component]
pub fn LogsPanel(ui: UiHandles) -> impl IntoView {
    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = ui.logs.with(Vec::len);

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span><i class="bi bi-terminal me-2"></i>"Process Log"</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| ui.clear_logs()
                >
                    "Clear"
                </button>
            </div>
            <div class="card-body process-log" id="processLog" node_ref=logs_container>
                <For
                    each=move || ui.logs.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(_, entry)| {
                        view! {
                            <div class=entry.level.css_class()>
                                <span class="text-muted">{entry.timestamp.clone()}</span>
                                " - "
                                <span>{entry.message.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
