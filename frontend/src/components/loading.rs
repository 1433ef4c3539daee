use leptos::*;

/// Full-screen overlay shown while a submission is running.
#[component]
pub fn LoadingOverlay(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            id="loadingOverlay"
            class=move || if visible.get() { "loading-overlay" } else { "loading-overlay d-none" }
        >
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Processing..."</span>
            </div>
        </div>
    }
}
