//! Converted files panel.

use leptos::*;

use crate::config::API_BASE_URL;
use crate::types::ConversionOutcome;
use crate::ui::UiHandles;

fn outcome_item(outcome: ConversionOutcome) -> View {
    let href = outcome.download_url(API_BASE_URL).unwrap_or_default();
    match outcome {
        ConversionOutcome::Success { original, converted } => view! {
            <div class="list-group-item d-flex justify-content-between align-items-center">
                <div>
                    <strong>{converted}</strong>
                    <small class="text-muted d-block">"From: " {original}</small>
                </div>
                <a href=href class="btn btn-sm btn-primary btn-download">
                    <i class="bi bi-download"></i>
                    " Download"
                </a>
            </div>
        }
        .into_view(),
        ConversionOutcome::Failure { original, error } => view! {
            <div class="list-group-item">
                <strong>{original}</strong>
                <small class="text-danger d-block">
                    <i class="bi bi-exclamation-triangle"></i>
                    " Error: " {error}
                </small>
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn ConvertedFiles(ui: UiHandles) -> impl IntoView {
    view! {
        <div class="card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span><i class="bi bi-files me-2"></i>"Converted Files"</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| ui.clear_outcomes()
                >
                    "Clear"
                </button>
            </div>
            <div class="list-group list-group-flush" id="convertedFiles">
                <Show
                    when=move || !ui.outcomes.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="list-group-item text-muted small">"No converted files yet"</div>
                    }
                >
                    <For
                        each=move || ui.outcomes.get().into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, outcome)| outcome_item(outcome)
                    />
                </Show>
            </div>
        </div>
    }
}
