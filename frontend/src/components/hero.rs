//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="text-center mb-4">
            <h1 class="h3">"Convert documents into training datasets"</h1>
            <p class="text-muted">
                "Upload PDF, CSV, JSON or text files and pick an output format. "
                "Each file is converted on the server and offered for download."
            </p>
        </div>
    }
}
