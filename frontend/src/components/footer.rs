//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center text-muted small py-4">
            "Dataset Converter • Powered by " <span class="badge text-bg-secondary">"🦀 Rust + Leptos"</span>
        </footer>
    }
}
